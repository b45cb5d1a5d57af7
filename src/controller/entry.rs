use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    model::entry::{CreateEntryCommand, EntryListQuery},
    service::entry::EntryService,
    state::AppState,
};

/// POST /api/entry - Create an entry for an existing author.
///
/// # Returns
/// - `201 Created`: the persisted entry with store-assigned id and timestamp
/// - `404 Not Found`: author does not exist
pub async fn create_entry(
    State(state): State<AppState>,
    Json(command): Json<CreateEntryCommand>,
) -> Result<impl IntoResponse, AppError> {
    let entry = EntryService::new(&state.store).create(command).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/entry - List entries newest-first, optionally by author.
pub async fn get_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let entries = EntryService::new(&state.store).list(query).await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// GET /api/entry/{id} - Fetch one entry with its author.
///
/// # Returns
/// - `200 OK`: entry detail with author user name
/// - `404 Not Found`: no entry with that id
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let detail = EntryService::new(&state.store)
        .detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry not found".to_string()))?;

    Ok((StatusCode::OK, Json(detail)))
}
