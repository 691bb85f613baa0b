//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Catalog book. The cipher is the catalog's own key and is supplied by the
/// caller at creation time, not generated by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_cipher: i32,
    pub book_name: String,
    pub first_author: String,
    pub year_of_publishing: i32,
    pub book_price_rub: i32,
    pub copies: i32,
    /// Publishing house, when known
    pub publishing_id: Option<i32>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    pub book_cipher: i32,
    #[validate(length(min = 1, max = 50))]
    pub book_name: String,
    #[validate(length(min = 1, max = 50))]
    pub first_author: String,
    #[validate(range(min = 0))]
    pub year_of_publishing: i32,
    #[validate(range(min = 0))]
    pub book_price_rub: i32,
    #[validate(range(min = 0, message = "Copies must not be negative"))]
    pub copies: i32,
    pub publishing_id: Option<i32>,
}

/// Update book request. Absent fields are left unchanged; present fields
/// overwrite the stored value, including explicit zeroes and empty strings.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(max = 50))]
    pub book_name: Option<String>,
    #[validate(length(max = 50))]
    pub first_author: Option<String>,
    pub year_of_publishing: Option<i32>,
    pub book_price_rub: Option<i32>,
    #[validate(range(min = 0, message = "Copies must not be negative"))]
    pub copies: Option<i32>,
    pub publishing_id: Option<i32>,
}
