use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError, model::user::LoginUserCommand, service::user::UserService, state::AppState,
};

/// POST /api/user/login - Verify credentials, return the login projection.
///
/// # Returns
/// - `200 OK`: LoginUserViewModel JSON
/// - `400 Bad Request`: unknown email or wrong password (indistinguishable)
pub async fn login(
    State(state): State<AppState>,
    Json(command): Json<LoginUserCommand>,
) -> Result<impl IntoResponse, AppError> {
    let view = UserService::new(&state.store).login(command).await?;

    Ok((StatusCode::OK, Json(view)))
}

/// POST /api/user/confirm-email/{id} - Consume an email-confirmation token.
///
/// # Returns
/// - `204 No Content`: address applied and token consumed
/// - `404 Not Found`: unknown token
pub async fn confirm_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.store).confirm_email(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
