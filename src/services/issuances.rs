//! Issuance (loan) management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::issuance::{CreateIssuance, Issuance},
    repository::Repository,
};

#[derive(Clone)]
pub struct IssuancesService {
    repository: Repository,
}

impl IssuancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a new issuance record. The named reader and book must both
    /// exist; the composite key rejects a second open record for the pair.
    pub async fn create_issuance(&self, issuance: CreateIssuance) -> AppResult<Issuance> {
        issuance.validate()?;

        self.repository.readers.get_by_id(issuance.reader_id).await?;
        self.repository
            .books
            .get_by_cipher(issuance.book_cipher)
            .await?;

        self.repository.issuances.create(&issuance).await
    }

    /// List issuance records for a reader
    pub async fn reader_issuances(&self, reader_id: i32) -> AppResult<Vec<Issuance>> {
        self.repository.readers.get_by_id(reader_id).await?;
        self.repository.issuances.list_for_reader(reader_id).await
    }

    /// Record the return of a borrowed book
    pub async fn return_issuance(&self, reader_id: i32, book_cipher: i32) -> AppResult<Issuance> {
        self.repository
            .issuances
            .mark_returned(reader_id, book_cipher)
            .await
    }
}
