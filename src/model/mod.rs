//! Wire DTOs shared by the HTTP layer.
//!
//! All request and response bodies serialize as camelCase JSON and derive
//! `utoipa::ToSchema` for the OpenAPI document.

pub mod api;
pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod job;
pub mod user;
