//! HTTP handlers.
//!
//! Handlers extract path, query and body, convert DTOs into server parameters, call the
//! matching service and turn the domain result back into a DTO. Extractor rejections are
//! taken as `Result` so they surface through `AppError` in the `{type, message}` envelope.

pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod index;
pub mod job;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::server::patch::PatchOutcome;

/// Renders a patch result: 200 with the updated record or 204 when nothing changed.
pub fn patch_response<T, D: Serialize>(outcome: PatchOutcome<T>, into_dto: impl FnOnce(T) -> D) -> Response {
    match outcome {
        PatchOutcome::Updated(record) => (StatusCode::OK, Json(into_dto(record))).into_response(),
        PatchOutcome::Unchanged => StatusCode::NO_CONTENT.into_response(),
    }
}

#[cfg(test)]
mod test;
