//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type controllers return; it wraps the
//! data-layer and configuration errors and implements `IntoResponse` so
//! endpoints can use `?` throughout. Internal errors are logged server-side
//! and a generic message goes to the client.

pub mod config;
pub mod repo;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::{
    error::{config::ConfigError, repo::RepoError},
    model::api::ErrorDto,
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup; nothing can run without it.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Data-access failure. Argument-style failures map to 400, the rest
    /// to 500.
    #[error(transparent)]
    RepoErr(#[from] RepoError),

    /// Database operation error from SeaORM outside the repository layer
    /// (startup, migrations, transactions).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found; 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Failed login; 400 with a deliberately unspecific message.
    #[error("invalid email address or password")]
    LoginFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::LoginFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid email address or password".to_string(),
                }),
            )
                .into_response(),
            Self::RepoErr(RepoError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper: logs the full error, returns a generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
