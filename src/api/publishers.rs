//! Publishing house endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::publisher::{CreatePublishing, Publishing, UpdatePublishing},
};

/// List publishing houses with at least one book in the catalog
#[utoipa::path(
    get,
    path = "/publishing/",
    tag = "publishing",
    responses(
        (status = 200, description = "Publishing houses with books", body = Vec<Publishing>)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Publishing>>> {
    let publishers = state.services.catalog.list_publishers_with_books().await?;
    Ok(Json(publishers))
}

/// Create a new publishing house
#[utoipa::path(
    post,
    path = "/publishing/",
    tag = "publishing",
    request_body = CreatePublishing,
    responses(
        (status = 200, description = "Publishing house created", body = Publishing),
        (status = 422, description = "Invalid input")
    )
)]
pub async fn create_publishing(
    State(state): State<crate::AppState>,
    Json(publishing): Json<CreatePublishing>,
) -> AppResult<Json<Publishing>> {
    let created = state.services.catalog.create_publishing(publishing).await?;
    Ok(Json(created))
}

/// Update an existing publishing house
#[utoipa::path(
    put,
    path = "/publishing/{id}",
    tag = "publishing",
    params(
        ("id" = i32, Path, description = "Publishing house ID")
    ),
    request_body = UpdatePublishing,
    responses(
        (status = 200, description = "Publishing house updated", body = Publishing),
        (status = 404, description = "Publishing house not found")
    )
)]
pub async fn update_publishing(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(publishing): Json<UpdatePublishing>,
) -> AppResult<Json<Publishing>> {
    let updated = state
        .services
        .catalog
        .update_publishing(id, publishing)
        .await?;
    Ok(Json(updated))
}
