//! Catalog operations: browsing, seller listings, moderation feed,
//! comments and favorites

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::multipart;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Error;
use crate::fetch::{ApiClient, DataEnvelope};

/// The catalog section a product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Second-hand books
    Book,

    /// Second-hand clothes
    Clothes,
}

impl ProductKind {
    /// The wire representation of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Book => "book",
            ProductKind::Clothes => "clothes",
        }
    }
}

/// A catalog product
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// The product ID
    pub id: u64,

    /// Product name
    pub name: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Catalog section
    #[serde(rename = "type")]
    pub kind: ProductKind,

    /// Price
    pub price: f64,

    /// Average rating
    #[serde(default)]
    pub rating: f64,

    /// Stock limit for cart quantities, when the backend reports one
    #[serde(default)]
    pub max_quantity: Option<u32>,
}

/// Payload for updating an existing listing
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProduct {
    /// Product name
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Category name
    pub category: String,

    /// Condition grade
    pub condition: String,
}

/// A new seller listing, submitted for approval
#[derive(Debug, Clone)]
pub struct NewProduct {
    /// Product name
    pub name: String,

    /// Category name
    pub category: String,

    /// Asking price
    pub price: f64,

    /// Free-form description
    pub description: String,

    /// Condition grade
    pub condition: String,
}

/// An image attached to a new listing
#[derive(Debug, Clone)]
pub struct ProductImage {
    /// File name reported to the backend
    pub file_name: String,

    /// Raw image bytes
    pub bytes: Vec<u8>,
}

/// A review comment on a product
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// The comment ID, when the backend assigns one
    #[serde(default)]
    pub id: Option<u64>,

    /// Comment text
    pub comment: String,

    /// Star rating
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Client for the product endpoints
pub struct ProductsClient {
    http: Arc<ApiClient>,
}

impl ProductsClient {
    /// Create a new ProductsClient
    pub(crate) fn new(http: Arc<ApiClient>) -> Self {
        Self { http }
    }

    /// List catalog products, optionally filtered to one section
    ///
    /// An absent or empty payload resolves to an empty list.
    pub async fn list(&self, kind: Option<ProductKind>) -> Result<Vec<Product>, Error> {
        let mut params = HashMap::new();
        params.insert(
            "type".to_string(),
            kind.as_ref().map_or("all", ProductKind::as_str).to_string(),
        );

        let body: DataEnvelope<Vec<Product>> = self
            .http
            .get("/products")
            .query(params)
            .execute()
            .await?;

        Ok(body.data.unwrap_or_default())
    }

    /// Fetch a single product by id
    pub async fn get(&self, id: u64) -> Result<Product, Error> {
        let body: DataEnvelope<Product> = self
            .http
            .get(&format!("/products/{}", id))
            .execute()
            .await?;

        body.data
            .ok_or_else(|| Error::general(format!("product {} has no data in response", id)))
    }

    /// Update an existing listing
    pub async fn update(&self, id: u64, payload: &UpdateProduct) -> Result<Product, Error> {
        let body: DataEnvelope<Product> = self
            .http
            .put(&format!("/products/{}", id))
            .json(payload)?
            .execute()
            .await?;

        body.data
            .ok_or_else(|| Error::general(format!("product {} has no data in response", id)))
    }

    /// Submit a new listing with its images as a multipart form
    ///
    /// Each listing field becomes a text part and each image an `image`
    /// file part; the multipart content type is preserved and the bearer
    /// token still attached.
    pub async fn create(
        &self,
        product: &NewProduct,
        images: Vec<ProductImage>,
    ) -> Result<(), Error> {
        let mut form = multipart::Form::new()
            .text("name", product.name.clone())
            .text("category", product.category.clone())
            .text("price", product.price.to_string())
            .text("description", product.description.clone())
            .text("condition", product.condition.clone());

        for image in images {
            form = form.part(
                "image",
                multipart::Part::bytes(image.bytes).file_name(image.file_name),
            );
        }

        self.http.post("/products").multipart(form).execute_empty().await
    }

    /// Remove a listing
    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        self.http
            .delete(&format!("/products/{}", id))
            .execute_empty()
            .await
    }

    /// Listings awaiting admin approval
    pub async fn pending_approval(&self) -> Result<Vec<Product>, Error> {
        let body: DataEnvelope<Vec<Product>> = self
            .http
            .get("/products/not-approved")
            .execute()
            .await?;

        Ok(body.data.unwrap_or_default())
    }

    /// Post a review comment on a product
    pub async fn add_comment(&self, id: u64, comment: &str, rating: u8) -> Result<Comment, Error> {
        self.http
            .post(&format!("/products/{}/comments", id))
            .json(&json!({ "comment": comment, "rating": rating }))?
            .execute()
            .await
    }

    /// Add a product to the current user's favorites
    pub async fn add_favorite(&self, id: u64) -> Result<(), Error> {
        self.http
            .post("/favorites")
            .json(&json!({ "productId": id }))?
            .execute_empty()
            .await
    }
}
