//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by services and controllers; it implements `IntoResponse` so handlers
//! can propagate it with `?` and have it rendered as the `{type, message}` envelope.

pub mod config;
pub mod internal;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Domain variants (`NotFound`, `AlreadyExists`, `Validation`) carry the message shown
/// to the client. Every other variant is an unexpected failure and is reported as a
/// 500 with a generic message while the details are logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O failure, typically while binding the listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Unexpected internal failure indicating a bug or corrupt stored data.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Entity absent or already soft-deleted.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness invariant would be violated.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    AlreadyExists(String),

    /// Malformed request, disallowed patch fields or unsupported filter criteria.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Turns a unique-constraint violation raised by the database into
    /// `AlreadyExists` with the given message; any other error is kept as is.
    ///
    /// The service layer checks uniqueness before writing, so this only fires when two
    /// requests race past that check.
    pub fn conflict_on_unique(self, message: impl Into<String>) -> Self {
        match self {
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists(message.into()),
                _ => Self::DbErr(err),
            },
            other => other,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `AlreadyExists`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto::error(msg))).into_response()
            }
            Self::AlreadyExists(msg) => {
                (StatusCode::CONFLICT, Json(MessageDto::error(msg))).into_response()
            }
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageDto::error(msg))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::error("Internal server error")),
        )
            .into_response()
    }
}
