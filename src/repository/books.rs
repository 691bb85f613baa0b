//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

const BOOK_COLUMNS: &str = "book_cipher, book_name, first_author, year_of_publishing, \
                            book_price_rub, copies, publishing_id";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books ORDER BY book_cipher",
            BOOK_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Get book by cipher
    pub async fn get_by_cipher(&self, cipher: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE book_cipher = $1",
            BOOK_COLUMNS
        ))
        .bind(cipher)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with cipher {} not found", cipher)))
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        let created = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (
                book_cipher, book_name, first_author,
                year_of_publishing, book_price_rub, copies, publishing_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        ))
        .bind(book.book_cipher)
        .bind(&book.book_name)
        .bind(&book.first_author)
        .bind(book.year_of_publishing)
        .bind(book.book_price_rub)
        .bind(book.copies)
        .bind(book.publishing_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Book cipher already registered"))?;

        Ok(created)
    }

    /// Update an existing book. Only fields present in the request are
    /// written; the rest keep their stored values.
    pub async fn update(&self, cipher: i32, book: &UpdateBook) -> AppResult<Book> {
        // Fail with NotFound before writing anything
        self.get_by_cipher(cipher).await?;

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

        add_field!(book.book_name, "book_name");
        add_field!(book.first_author, "first_author");
        add_field!(book.year_of_publishing, "year_of_publishing");
        add_field!(book.book_price_rub, "book_price_rub");
        add_field!(book.copies, "copies");
        add_field!(book.publishing_id, "publishing_id");

        if sets.is_empty() {
            return self.get_by_cipher(cipher).await;
        }

        let query = format!(
            "UPDATE books SET {} WHERE book_cipher = ${}",
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

        bind_field!(book.book_name);
        bind_field!(book.first_author);
        bind_field!(book.year_of_publishing);
        bind_field!(book.book_price_rub);
        bind_field!(book.copies);
        bind_field!(book.publishing_id);

        builder = builder.bind(cipher);
        builder.execute(&self.pool).await?;

        self.get_by_cipher(cipher).await
    }
}
