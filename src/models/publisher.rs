//! Publishing house model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Publishing house record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publishing {
    pub id: i32,
    pub publishing_name: String,
    pub publishing_city: String,
}

/// Create publishing house request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePublishing {
    #[validate(length(min = 1, max = 100))]
    pub publishing_name: String,
    #[validate(length(min = 1, max = 50))]
    pub publishing_city: String,
}

/// Update publishing house request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePublishing {
    #[validate(length(max = 100))]
    pub publishing_name: Option<String>,
    #[validate(length(max = 50))]
    pub publishing_city: Option<String>,
}
