//! Issuance records repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::issuance::{CreateIssuance, Issuance},
};

const ISSUANCE_COLUMNS: &str = "reader_id, book_cipher, date_of_issue, signature, return_date";

#[derive(Clone)]
pub struct IssuancesRepository {
    pool: Pool<Postgres>,
}

impl IssuancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get issuance by its composite key
    pub async fn get(&self, reader_id: i32, book_cipher: i32) -> AppResult<Issuance> {
        sqlx::query_as::<_, Issuance>(&format!(
            "SELECT {} FROM issuance WHERE reader_id = $1 AND book_cipher = $2",
            ISSUANCE_COLUMNS
        ))
        .bind(reader_id)
        .bind(book_cipher)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Issuance for reader {} and book {} not found",
                reader_id, book_cipher
            ))
        })
    }

    /// List issuance records for a reader, most recent first
    pub async fn list_for_reader(&self, reader_id: i32) -> AppResult<Vec<Issuance>> {
        let issuances = sqlx::query_as::<_, Issuance>(&format!(
            "SELECT {} FROM issuance WHERE reader_id = $1 ORDER BY date_of_issue DESC",
            ISSUANCE_COLUMNS
        ))
        .bind(reader_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(issuances)
    }

    /// Create a new issuance record
    pub async fn create(&self, issuance: &CreateIssuance) -> AppResult<Issuance> {
        let date_of_issue = issuance.date_of_issue.unwrap_or_else(Utc::now);

        let created = sqlx::query_as::<_, Issuance>(&format!(
            r#"
            INSERT INTO issuance (reader_id, book_cipher, date_of_issue, signature)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            ISSUANCE_COLUMNS
        ))
        .bind(issuance.reader_id)
        .bind(issuance.book_cipher)
        .bind(date_of_issue)
        .bind(&issuance.signature)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Book already issued to this reader"))?;

        Ok(created)
    }

    /// Record the return of a borrowed book
    pub async fn mark_returned(&self, reader_id: i32, book_cipher: i32) -> AppResult<Issuance> {
        let issuance = self.get(reader_id, book_cipher).await?;

        if issuance.return_date.is_some() {
            return Err(AppError::BadRequest("Book already returned".to_string()));
        }

        let returned = sqlx::query_as::<_, Issuance>(&format!(
            r#"
            UPDATE issuance SET return_date = $1
            WHERE reader_id = $2 AND book_cipher = $3
            RETURNING {}
            "#,
            ISSUANCE_COLUMNS
        ))
        .bind(Utc::now())
        .bind(reader_id)
        .bind(book_cipher)
        .fetch_one(&self.pool)
        .await?;

        Ok(returned)
    }
}
