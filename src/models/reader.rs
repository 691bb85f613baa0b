//! Reader model and related types

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

/// Registered library reader
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reader {
    pub id: i32,
    pub reader_name: String,
    pub surname: String,
    pub patronymic: String,
    pub address: String,
    pub phone: String,
}

/// Create reader request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReader {
    #[validate(length(min = 1, max = 50))]
    pub reader_name: String,
    #[validate(length(min = 1, max = 50))]
    pub surname: String,
    #[validate(length(max = 50))]
    pub patronymic: String,
    #[validate(length(max = 50))]
    pub address: String,
    /// Contact phone, 11 digits
    #[validate(regex(path = *PHONE_RE, message = "Phone must be 11 digits"))]
    pub phone: String,
}
