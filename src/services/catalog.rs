//! Catalog management service: books and publishing houses

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        publisher::{CreatePublishing, Publishing, UpdatePublishing},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by cipher
    pub async fn get_book(&self, cipher: i32) -> AppResult<Book> {
        self.repository.books.get_by_cipher(cipher).await
    }

    /// Create a new book
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        self.check_publishing_id(book.publishing_id).await?;

        self.repository.books.create(&book).await
    }

    /// Update an existing book with the fields present in the request
    pub async fn update_book(&self, cipher: i32, book: UpdateBook) -> AppResult<Book> {
        book.validate()?;
        self.check_publishing_id(book.publishing_id).await?;

        self.repository.books.update(cipher, &book).await
    }

    /// List publishing houses with at least one book
    pub async fn list_publishers_with_books(&self) -> AppResult<Vec<Publishing>> {
        self.repository.publishers.list_with_books().await
    }

    /// Create a new publishing house
    pub async fn create_publishing(&self, publishing: CreatePublishing) -> AppResult<Publishing> {
        publishing.validate()?;
        self.repository.publishers.create(&publishing).await
    }

    /// Update an existing publishing house
    pub async fn update_publishing(
        &self,
        id: i32,
        publishing: UpdatePublishing,
    ) -> AppResult<Publishing> {
        publishing.validate()?;
        self.repository.publishers.update(id, &publishing).await
    }

    /// A book may only name a publishing house that exists
    async fn check_publishing_id(&self, publishing_id: Option<i32>) -> AppResult<()> {
        if let Some(id) = publishing_id {
            match self.repository.publishers.get_by_id(id).await {
                Ok(_) => {}
                Err(AppError::NotFound(_)) => {
                    return Err(AppError::BadRequest(format!(
                        "Publishing house with id {} does not exist",
                        id
                    )));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
