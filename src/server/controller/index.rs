use std::collections::BTreeMap;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::api::{HealthDto, ServiceIndexDto},
    server::state::AppState,
};

pub static INDEX_TAG: &str = "service";

/// Collections served by this process, in route order.
pub const MODULES: [&str; 6] = [
    "users",
    "jobs",
    "entreprises",
    "emplois",
    "candidats",
    "applications",
];

/// Service index with name, version and the served modules.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses((status = 200, description = "Service index", body = ServiceIndexDto)),
)]
pub async fn index() -> impl IntoResponse {
    Json(ServiceIndexDto {
        name: env!("CARGO_PKG_NAME").to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        modules: MODULES.iter().map(|module| module.to_string()).collect(),
    })
}

/// Per-module status. Every module shares the one storage connection, so they are all
/// reported unavailable when the database does not answer a ping.
#[utoipa::path(
    get,
    path = "/health",
    tag = INDEX_TAG,
    responses((status = 200, description = "Per-module status", body = HealthDto)),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let reachable = match state.db.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Database ping failed: {}", err);
            false
        }
    };
    let module_status = if reachable { "ok" } else { "unavailable" };

    let modules: BTreeMap<String, String> = MODULES
        .iter()
        .map(|module| (module.to_string(), module_status.to_string()))
        .collect();

    Json(HealthDto {
        status: if reachable { "healthy" } else { "degraded" }.to_string(),
        modules,
    })
}
