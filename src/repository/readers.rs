//! Readers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reader::{CreateReader, Reader},
};

const READER_COLUMNS: &str = "id, reader_name, surname, patronymic, address, phone";

#[derive(Clone)]
pub struct ReadersRepository {
    pool: Pool<Postgres>,
}

impl ReadersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reader by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reader> {
        sqlx::query_as::<_, Reader>(&format!(
            "SELECT {} FROM readers WHERE id = $1",
            READER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reader with id {} not found", id)))
    }

    /// Create a new reader
    pub async fn create(&self, reader: &CreateReader) -> AppResult<Reader> {
        let created = sqlx::query_as::<_, Reader>(&format!(
            r#"
            INSERT INTO readers (reader_name, surname, patronymic, address, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            READER_COLUMNS
        ))
        .bind(&reader.reader_name)
        .bind(&reader.surname)
        .bind(&reader.patronymic)
        .bind(&reader.address)
        .bind(&reader.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// List readers holding at least one overdue issuance: issued strictly
    /// before the current date and not yet returned.
    pub async fn list_overdue(&self) -> AppResult<Vec<Reader>> {
        let readers = sqlx::query_as::<_, Reader>(
            r#"
            SELECT DISTINCT r.id, r.reader_name, r.surname, r.patronymic, r.address, r.phone
            FROM readers r
            JOIN issuance i ON i.reader_id = r.id
            WHERE i.return_date IS NULL
              AND i.date_of_issue::date < CURRENT_DATE
            ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readers)
    }
}
