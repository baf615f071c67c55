use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{MessageDto, PageDto},
        entreprise::{CreateEntrepriseDto, EntrepriseDto, EntrepriseListQuery, UpdateEntrepriseDto},
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::entreprise::{CreateEntrepriseParams, Entreprise, EntreprisePatch},
        query::Filters,
        service::entreprise::EntrepriseService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static ENTREPRISE_TAG: &str = "entreprises";

/// Create a new entreprise. Names are unique.
#[utoipa::path(
    post,
    path = "/entreprises",
    tag = ENTREPRISE_TAG,
    request_body = CreateEntrepriseDto,
    responses(
        (status = 201, description = "Entreprise created", body = EntrepriseDto),
        (status = 400, description = "Invalid entreprise data", body = MessageDto),
        (status = 409, description = "Name already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_entreprise(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntrepriseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let entreprise = EntrepriseService::new(&state.db)
        .create(CreateEntrepriseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entreprise.into_dto())))
}

#[utoipa::path(
    get,
    path = "/entreprises",
    tag = ENTREPRISE_TAG,
    params(EntrepriseListQuery),
    responses(
        (status = 200, description = "Page of entreprises", body = PageDto<EntrepriseDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_entreprises(
    State(state): State<AppState>,
    query: Result<Query<EntrepriseListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let page = EntrepriseService::new(&state.db)
        .list(&Filters::page(query.skip, query.limit))
        .await?;

    Ok(Json(page.into_dto(Entreprise::into_dto)))
}

#[utoipa::path(
    get,
    path = "/entreprises/{id}",
    tag = ENTREPRISE_TAG,
    params(("id" = i32, Path, description = "Entreprise ID")),
    responses(
        (status = 200, description = "The entreprise", body = EntrepriseDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Entreprise not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_entreprise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Entreprise")?;

    let entreprise = EntrepriseService::new(&state.db).get_by_id(id).await?;

    Ok(Json(entreprise.into_dto()))
}

/// Look an entreprise up by its exact name.
#[utoipa::path(
    get,
    path = "/entreprises/name/{name}",
    tag = ENTREPRISE_TAG,
    params(("name" = String, Path, description = "Entreprise name")),
    responses(
        (status = 200, description = "The entreprise", body = EntrepriseDto),
        (status = 404, description = "Entreprise not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_entreprise_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entreprise = EntrepriseService::new(&state.db).get_by_name(&name).await?;

    Ok(Json(entreprise.into_dto()))
}

/// Partially update an entreprise; 204 when nothing changed.
#[utoipa::path(
    patch,
    path = "/entreprises/{id}",
    tag = ENTREPRISE_TAG,
    params(("id" = i32, Path, description = "Entreprise ID")),
    request_body = UpdateEntrepriseDto,
    responses(
        (status = 200, description = "Entreprise updated", body = EntrepriseDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "Entreprise not found", body = MessageDto),
        (status = 409, description = "Name already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_entreprise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEntrepriseDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Entreprise")?;
    let Json(payload) = payload?;

    let outcome = EntrepriseService::new(&state.db)
        .update(id, EntreprisePatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, Entreprise::into_dto))
}

/// Delete an entreprise. Entreprises are removed permanently.
#[utoipa::path(
    delete,
    path = "/entreprises/{id}",
    tag = ENTREPRISE_TAG,
    params(("id" = i32, Path, description = "Entreprise ID")),
    responses(
        (status = 200, description = "Entreprise deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Entreprise not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_entreprise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Entreprise")?;

    EntrepriseService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Entreprise deleted successfully")))
}
