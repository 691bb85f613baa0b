//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get book details by cipher
#[utoipa::path(
    get,
    path = "/books/{cipher}",
    tag = "books",
    params(
        ("cipher" = i32, Path, description = "Book cipher")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(cipher): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(cipher).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Cipher already registered or unknown publishing house"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<Json<Book>> {
    let created = state.services.catalog.create_book(book).await?;
    Ok(Json(created))
}

/// Update an existing book. Fields absent from the body keep their stored
/// values.
#[utoipa::path(
    put,
    path = "/books/{cipher}",
    tag = "books",
    params(
        ("cipher" = i32, Path, description = "Book cipher")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(cipher): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(cipher, book).await?;
    Ok(Json(updated))
}
