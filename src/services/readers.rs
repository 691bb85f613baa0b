//! Reader management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReadersService {
    repository: Repository,
}

impl ReadersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get reader by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        self.repository.readers.get_by_id(id).await
    }

    /// Create a new reader
    pub async fn create_reader(&self, reader: CreateReader) -> AppResult<Reader> {
        reader.validate()?;
        self.repository.readers.create(&reader).await
    }

    /// List readers holding at least one overdue issuance
    pub async fn overdue_readers(&self) -> AppResult<Vec<Reader>> {
        self.repository.readers.list_overdue().await
    }
}
