//! Publishing houses repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::publisher::{CreatePublishing, Publishing, UpdatePublishing},
};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get publishing house by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Publishing> {
        sqlx::query_as::<_, Publishing>(
            "SELECT id, publishing_name, publishing_city FROM publishing WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Publishing house with id {} not found", id)))
    }

    /// List publishing houses that have at least one book in the catalog.
    /// Relationships are resolved with an explicit join, not back-references.
    pub async fn list_with_books(&self) -> AppResult<Vec<Publishing>> {
        let publishers = sqlx::query_as::<_, Publishing>(
            r#"
            SELECT DISTINCT p.id, p.publishing_name, p.publishing_city
            FROM publishing p
            JOIN books b ON b.publishing_id = p.id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }

    /// Create a new publishing house
    pub async fn create(&self, publishing: &CreatePublishing) -> AppResult<Publishing> {
        let created = sqlx::query_as::<_, Publishing>(
            r#"
            INSERT INTO publishing (publishing_name, publishing_city)
            VALUES ($1, $2)
            RETURNING id, publishing_name, publishing_city
            "#,
        )
        .bind(&publishing.publishing_name)
        .bind(&publishing.publishing_city)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Update an existing publishing house. Only fields present in the
    /// request are written.
    pub async fn update(&self, id: i32, publishing: &UpdatePublishing) -> AppResult<Publishing> {
        self.get_by_id(id).await?;

        let mut sets = Vec::new();
        let mut param_idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(publishing.publishing_name, "publishing_name");
        add_field!(publishing.publishing_city, "publishing_city");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE publishing SET {} WHERE id = ${}",
            sets.join(", "),
            param_idx
        );

        let mut builder = sqlx::query(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(publishing.publishing_name);
        bind_field!(publishing.publishing_city);

        builder = builder.bind(id);
        builder.execute(&self.pool).await?;

        self.get_by_id(id).await
    }
}
