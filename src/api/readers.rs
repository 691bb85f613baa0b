//! Reader management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::reader::{CreateReader, Reader},
};

/// Get reader details by ID
#[utoipa::path(
    get,
    path = "/readers/{id}",
    tag = "readers",
    params(
        ("id" = i32, Path, description = "Reader ID")
    ),
    responses(
        (status = 200, description = "Reader details", body = Reader),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn get_reader(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Reader>> {
    let reader = state.services.readers.get_by_id(id).await?;
    Ok(Json(reader))
}

/// Register a new reader
#[utoipa::path(
    post,
    path = "/readers/",
    tag = "readers",
    request_body = CreateReader,
    responses(
        (status = 200, description = "Reader created", body = Reader),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_reader(
    State(state): State<crate::AppState>,
    Json(reader): Json<CreateReader>,
) -> AppResult<Json<Reader>> {
    let created = state.services.readers.create_reader(reader).await?;
    Ok(Json(created))
}

/// List readers holding at least one overdue issuance
#[utoipa::path(
    get,
    path = "/readers/overdue/",
    tag = "readers",
    responses(
        (status = 200, description = "Readers with an overdue issuance", body = Vec<Reader>)
    )
)]
pub async fn overdue_readers(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Reader>>> {
    let readers = state.services.readers.overdue_readers().await?;
    Ok(Json(readers))
}
