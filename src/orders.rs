//! Checkout and order operations
//!
//! Orders are placed either as plain JSON (cash on delivery) or as a
//! multipart form carrying the InstaPay payment proof. Admin moderation of
//! submitted payments reads and deletes through the admin order endpoints.

use std::sync::Arc;

use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::Error;
use crate::fetch::{ApiClient, DataEnvelope};

/// Flat delivery charge applied to every order
pub const DELIVERY_CHARGE: f64 = 25.0;

/// Compute an order total: the item prices plus the delivery charge
pub fn order_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.product.price).sum::<f64>() + DELIVERY_CHARGE
}

/// How the buyer pays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery
    Cash,

    /// InstaPay transfer with an uploaded proof
    Instapay,
}

/// One ordered product line
#[derive(Debug, Clone, Serialize)]
pub struct OrderLine {
    /// The product ID
    pub id: u64,

    /// Price at order time
    pub price: f64,
}

/// A checkout submission
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    /// How the buyer pays
    pub payment_method: PaymentMethod,

    /// Buyer contact (email or phone)
    pub contact: String,

    /// Delivery charge included in the total
    pub delivery_charge: f64,

    /// Order total including delivery
    pub total_amount: f64,

    /// The ordered product lines
    pub products: Vec<OrderLine>,
}

/// The InstaPay payment proof upload
#[derive(Debug, Clone)]
pub struct PaymentProof {
    /// File name reported to the backend
    pub file_name: String,

    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// The buyer on a placed order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderUser {
    /// The user ID
    pub id: u64,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

/// One line of a placed order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    /// The product ID
    pub id: u64,

    /// Product name
    pub name: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Price at order time
    pub price: f64,

    /// Units ordered
    pub quantity: u32,

    /// Catalog section
    #[serde(rename = "type")]
    pub kind: String,
}

/// A placed order as reported by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// The order ID
    pub id: u64,

    /// The buyer
    pub user: OrderUser,

    /// The ordered lines
    pub items: Vec<OrderItem>,

    /// Order total
    pub total: f64,

    /// Order status
    pub status: String,

    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Client for the order endpoints
pub struct OrdersClient {
    http: Arc<ApiClient>,
}

impl OrdersClient {
    /// Create a new OrdersClient
    pub(crate) fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// Place a cash-on-delivery order
    pub async fn place(&self, order: &NewOrder) -> Result<(), Error> {
        self.http.post("/orders").json(order)?.execute_empty().await
    }

    /// Place an InstaPay order with its payment proof
    ///
    /// The order fields are flattened to text parts, the product lines are
    /// serialized as a JSON part, and the proof rides along as a file part.
    /// The multipart content type is preserved end to end.
    pub async fn place_with_proof(
        &self,
        order: &NewOrder,
        instapay_number: &str,
        proof: PaymentProof,
    ) -> Result<(), Error> {
        let form = multipart::Form::new()
            .text("payment_method", serde_variant(order.payment_method)?)
            .text("contact", order.contact.clone())
            .text("delivery_charge", order.delivery_charge.to_string())
            .text("total_amount", order.total_amount.to_string())
            .text("products", serde_json::to_string(&order.products)?)
            .text("instapay_number", instapay_number.to_string())
            .part(
                "payment_proof",
                multipart::Part::bytes(proof.bytes).file_name(proof.file_name),
            );

        self.http.post("/orders").multipart(form).execute_empty().await
    }

    /// The current user's placed orders
    pub async fn list(&self) -> Result<Vec<Order>, Error> {
        let body: DataEnvelope<Vec<Order>> = self.http.get("/orders").execute().await?;
        Ok(body.data.unwrap_or_default())
    }

    /// All orders, for admin moderation
    pub async fn admin_list(&self) -> Result<Vec<Order>, Error> {
        let body: DataEnvelope<Vec<Order>> = self.http.get("/admin-orders").execute().await?;
        Ok(body.data.unwrap_or_default())
    }

    /// Remove an order from the admin queue
    pub async fn admin_delete(&self, id: u64) -> Result<(), Error> {
        self.http
            .delete(&format!("/admin-orders/{}", id))
            .execute_empty()
            .await
    }
}

fn serde_variant(method: PaymentMethod) -> Result<String, Error> {
    // serde_json renders the enum as a quoted string; strip the quotes for
    // the plain-text form part.
    let quoted = serde_json::to_string(&method)?;
    Ok(quoted.trim_matches('"').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::{Product, ProductKind};

    fn item(price: f64) -> CartItem {
        CartItem {
            quantity: 1,
            product: Product {
                id: 1,
                name: "The Great Gatsby".to_string(),
                image: String::new(),
                kind: ProductKind::Book,
                price,
                rating: 0.0,
                max_quantity: None,
            },
        }
    }

    #[test]
    fn total_is_item_prices_plus_delivery() {
        let items = [item(45.0), item(35.0)];
        assert_eq!(order_total(&items), 45.0 + 35.0 + DELIVERY_CHARGE);
    }

    #[test]
    fn empty_cart_still_pays_delivery() {
        assert_eq!(order_total(&[]), DELIVERY_CHARGE);
    }

    #[test]
    fn payment_methods_serialize_lowercase() {
        assert_eq!(serde_variant(PaymentMethod::Cash).unwrap(), "cash");
        assert_eq!(serde_variant(PaymentMethod::Instapay).unwrap(), "instapay");
    }
}
