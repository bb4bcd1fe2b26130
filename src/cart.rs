//! Shopping cart operations

use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;

use crate::error::Error;
use crate::fetch::{ApiClient, DataEnvelope};
use crate::products::Product;

fn default_quantity() -> u32 {
    1
}

/// A cart entry with its nested product record
///
/// The backend keys cart mutations by the product id, so no separate entry
/// id is carried.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    /// Number of units in the cart
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// The product in the cart
    pub product: Product,
}

/// Client for the cart endpoints
pub struct CartClient {
    http: Arc<ApiClient>,
}

impl CartClient {
    /// Create a new CartClient
    pub(crate) fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// The current user's cart contents
    pub async fn items(&self) -> Result<Vec<CartItem>, Error> {
        let body: DataEnvelope<Vec<CartItem>> = self.http.get("/cart").execute().await?;
        Ok(body.data.unwrap_or_default())
    }

    /// Add a product to the cart
    pub async fn add(&self, product_id: u64) -> Result<(), Error> {
        self.http
            .post("/cart")
            .json(&json!({ "product_id": product_id }))?
            .execute_empty()
            .await
    }

    /// Set the quantity of a cart entry
    pub async fn set_quantity(&self, product_id: u64, quantity: u32) -> Result<(), Error> {
        self.http
            .put(&format!("/cart/{}", product_id))
            .json(&json!({ "quantity": quantity }))?
            .execute_empty()
            .await
    }

    /// Remove a product from the cart
    pub async fn remove(&self, product_id: u64) -> Result<(), Error> {
        self.http
            .delete(&format!("/cart/{}", product_id))
            .execute_empty()
            .await
    }
}
