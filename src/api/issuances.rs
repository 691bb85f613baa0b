//! Issuance (loan) endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::issuance::{CreateIssuance, Issuance},
};

/// Issue a book to a reader
#[utoipa::path(
    post,
    path = "/issuances/",
    tag = "issuances",
    request_body = CreateIssuance,
    responses(
        (status = 200, description = "Issuance created", body = Issuance),
        (status = 400, description = "Book already issued to this reader"),
        (status = 404, description = "Reader or book not found"),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_issuance(
    State(state): State<crate::AppState>,
    Json(issuance): Json<CreateIssuance>,
) -> AppResult<Json<Issuance>> {
    let created = state.services.issuances.create_issuance(issuance).await?;
    Ok(Json(created))
}

/// List issuance records for a reader
#[utoipa::path(
    get,
    path = "/readers/{id}/issuances",
    tag = "issuances",
    params(
        ("id" = i32, Path, description = "Reader ID")
    ),
    responses(
        (status = 200, description = "Reader's issuance records", body = Vec<Issuance>),
        (status = 404, description = "Reader not found")
    )
)]
pub async fn list_reader_issuances(
    State(state): State<crate::AppState>,
    Path(reader_id): Path<i32>,
) -> AppResult<Json<Vec<Issuance>>> {
    let issuances = state.services.issuances.reader_issuances(reader_id).await?;
    Ok(Json(issuances))
}

/// Record the return of a borrowed book
#[utoipa::path(
    post,
    path = "/issuances/{reader_id}/{cipher}/return",
    tag = "issuances",
    params(
        ("reader_id" = i32, Path, description = "Reader ID"),
        ("cipher" = i32, Path, description = "Book cipher")
    ),
    responses(
        (status = 200, description = "Return recorded", body = Issuance),
        (status = 400, description = "Book already returned"),
        (status = 404, description = "Issuance not found")
    )
)]
pub async fn return_issuance(
    State(state): State<crate::AppState>,
    Path((reader_id, cipher)): Path<(i32, i32)>,
) -> AppResult<Json<Issuance>> {
    let returned = state
        .services
        .issuances
        .return_issuance(reader_id, cipher)
        .await?;
    Ok(Json(returned))
}
