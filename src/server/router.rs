use axum::{
    routing::{get, patch},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::api::{HealthDto, MessageDto, ServiceIndexDto},
    server::{
        controller::{application, candidat, emploi, entreprise, index, job, user},
        state::AppState,
    },
};

/// OpenAPI document for every route served by [`router`].
#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        index::health,
        user::create_user,
        user::get_users,
        user::get_user,
        user::update_user,
        user::suspend_user,
        user::activate_user,
        user::delete_user,
        job::create_job,
        job::get_jobs,
        job::get_job,
        job::update_job,
        job::delete_job,
        entreprise::create_entreprise,
        entreprise::get_entreprises,
        entreprise::get_entreprise,
        entreprise::get_entreprise_by_name,
        entreprise::update_entreprise,
        entreprise::delete_entreprise,
        emploi::create_emploi,
        emploi::get_emplois,
        emploi::get_emploi,
        emploi::update_emploi,
        emploi::delete_emploi,
        candidat::create_candidat,
        candidat::get_candidats,
        candidat::get_candidat,
        candidat::update_candidat,
        candidat::delete_candidat,
        application::create_application,
        application::get_applications,
        application::get_application,
        application::update_application,
        application::delete_application,
    ),
    components(schemas(MessageDto, ServiceIndexDto, HealthDto)),
    info(title = "JCI API", description = "Users, jobs, entreprises, emplois, candidats and applications")
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/health", get(index::health))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/users/{id}/suspend", patch(user::suspend_user))
        .route("/users/{id}/activate", patch(user::activate_user))
        .route("/jobs", get(job::get_jobs).post(job::create_job))
        .route(
            "/jobs/{id}",
            get(job::get_job)
                .patch(job::update_job)
                .delete(job::delete_job),
        )
        .route(
            "/entreprises",
            get(entreprise::get_entreprises).post(entreprise::create_entreprise),
        )
        .route(
            "/entreprises/name/{name}",
            get(entreprise::get_entreprise_by_name),
        )
        .route(
            "/entreprises/{id}",
            get(entreprise::get_entreprise)
                .patch(entreprise::update_entreprise)
                .delete(entreprise::delete_entreprise),
        )
        .route("/emplois", get(emploi::get_emplois).post(emploi::create_emploi))
        .route(
            "/emplois/{id}",
            get(emploi::get_emploi)
                .patch(emploi::update_emploi)
                .delete(emploi::delete_emploi),
        )
        .route(
            "/candidats",
            get(candidat::get_candidats).post(candidat::create_candidat),
        )
        .route(
            "/candidats/{id}",
            get(candidat::get_candidat)
                .patch(candidat::update_candidat)
                .delete(candidat::delete_candidat),
        )
        .route(
            "/applications",
            get(application::get_applications).post(application::create_application),
        )
        .route(
            "/applications/{id}",
            get(application::get_application)
                .patch(application::update_application)
                .delete(application::delete_application),
        )
}
