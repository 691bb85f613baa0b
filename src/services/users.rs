//! User management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a new user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<User> {
        user.validate()?;

        // Pre-check for a precise message; the unique index still backstops
        // concurrent inserts
        if self.repository.users.email_exists(&user.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        self.repository.users.create(&user).await
    }
}
