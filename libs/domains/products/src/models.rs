use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Longest title the `products.title` column accepts.
pub const MAX_TITLE_LENGTH: u64 = 255;

/// Product record as stored and as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identifier assigned by the store
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Book")]
    pub title: String,
    #[schema(example = 9.99)]
    pub price: f64,
    /// Set by the store on insert
    pub created_at: DateTime<Utc>,
    /// Set by the store on insert, refreshed on every update
    pub updated_at: DateTime<Utc>,
    /// Optional free-form description
    pub content: Option<String>,
}

/// Body of `POST /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(max = MAX_TITLE_LENGTH))]
    #[schema(example = "Book", max_length = 255)]
    pub title: String,

    #[schema(example = 9.99)]
    pub price: f64,

    #[serde(default)]
    #[schema(example = "A paperback edition")]
    pub content: Option<String>,
}

/// Response of `POST /api/products`
///
/// Echoes the created record without its content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProduct {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Book")]
    pub title: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for CreatedProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
