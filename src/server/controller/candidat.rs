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
        candidat::{CandidatDto, CandidatListQuery, CreateCandidatDto, UpdateCandidatDto},
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::candidat::{Candidat, CandidatPatch, CreateCandidatParams},
        query::Filters,
        service::candidat::CandidatService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static CANDIDAT_TAG: &str = "candidats";

#[utoipa::path(
    post,
    path = "/candidats",
    tag = CANDIDAT_TAG,
    request_body = CreateCandidatDto,
    responses(
        (status = 201, description = "Candidate profile created", body = CandidatDto),
        (status = 400, description = "Invalid candidate data", body = MessageDto),
        (status = 409, description = "User already has a profile", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_candidat(
    State(state): State<AppState>,
    payload: Result<Json<CreateCandidatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let candidat = CandidatService::new(&state.db)
        .create(CreateCandidatParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(candidat.into_dto())))
}

/// List candidate profiles, or return the profile of `userId` when given.
#[utoipa::path(
    get,
    path = "/candidats",
    tag = CANDIDAT_TAG,
    params(CandidatListQuery),
    responses(
        (status = 200, description = "Page of profiles, or the profile of a user", body = PageDto<CandidatDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 404, description = "User has no profile", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_candidats(
    State(state): State<AppState>,
    query: Result<Query<CandidatListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = CandidatService::new(&state.db);

    if let Some(user_id) = query.user_id {
        let candidat = service.get_by_user_id(user_id).await?;
        return Ok(Json(candidat.into_dto()).into_response());
    }

    let page = service.list(&Filters::page(query.skip, query.limit)).await?;

    Ok(Json(page.into_dto(Candidat::into_dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/candidats/{id}",
    tag = CANDIDAT_TAG,
    params(("id" = i32, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "The candidate profile", body = CandidatDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Candidate not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_candidat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Candidat")?;

    let candidat = CandidatService::new(&state.db).get_by_id(id).await?;

    Ok(Json(candidat.into_dto()))
}

/// Partially update a profile. `skills` replaces the whole list.
#[utoipa::path(
    patch,
    path = "/candidats/{id}",
    tag = CANDIDAT_TAG,
    params(("id" = i32, Path, description = "Candidate ID")),
    request_body = UpdateCandidatDto,
    responses(
        (status = 200, description = "Profile updated", body = CandidatDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "Candidate not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_candidat(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCandidatDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Candidat")?;
    let Json(payload) = payload?;

    let outcome = CandidatService::new(&state.db)
        .update(id, CandidatPatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, Candidat::into_dto))
}

#[utoipa::path(
    delete,
    path = "/candidats/{id}",
    tag = CANDIDAT_TAG,
    params(("id" = i32, Path, description = "Candidate ID")),
    responses(
        (status = 200, description = "Profile deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Candidate not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_candidat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Candidat")?;

    CandidatService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Candidat deleted successfully")))
}
