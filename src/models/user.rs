//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// User record as stored and returned to callers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Create user request. The identifier is generated by the store and never
/// accepted from the caller.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,
    /// Email address, unique across all users
    #[validate(
        email(message = "Invalid email format"),
        length(max = 100, message = "Email must be at most 100 characters")
    )]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_accepts_valid_payload() {
        let user = CreateUser {
            name: "Ivan Petrov".to_string(),
            email: "ivan@example.org".to_string(),
        };
        assert!(user.validate().is_ok());
    }

    #[test]
    fn create_user_rejects_malformed_email() {
        let user = CreateUser {
            name: "Ivan Petrov".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(user.validate().is_err());
    }

    #[test]
    fn create_user_rejects_empty_name() {
        let user = CreateUser {
            name: String::new(),
            email: "ivan@example.org".to_string(),
        };
        assert!(user.validate().is_err());
    }
}
