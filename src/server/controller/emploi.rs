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
        emploi::{CreateEmploiDto, EmploiDto, EmploiListQuery, UpdateEmploiDto},
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::emploi::{CreateEmploiParams, Emploi, EmploiPatch},
        query::Filters,
        service::emploi::EmploiService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static EMPLOI_TAG: &str = "emplois";

/// Link a user to an entreprise. Only one active link per pair.
#[utoipa::path(
    post,
    path = "/emplois",
    tag = EMPLOI_TAG,
    request_body = CreateEmploiDto,
    responses(
        (status = 201, description = "Emploi created", body = EmploiDto),
        (status = 400, description = "Invalid emploi data", body = MessageDto),
        (status = 409, description = "Active link already exists", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_emploi(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmploiDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let emploi = EmploiService::new(&state.db)
        .create(CreateEmploiParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(emploi.into_dto())))
}

/// List emplois.
///
/// With both `userId` and `entrepriseId` the single active link is returned (404 when
/// absent); otherwise a page filtered by whichever of the two is given.
#[utoipa::path(
    get,
    path = "/emplois",
    tag = EMPLOI_TAG,
    params(EmploiListQuery),
    responses(
        (status = 200, description = "Page of emplois, or the link for a user/entreprise pair", body = PageDto<EmploiDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 404, description = "No active link for the pair", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_emplois(
    State(state): State<AppState>,
    query: Result<Query<EmploiListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = EmploiService::new(&state.db);

    if let (Some(user_id), Some(entreprise_id)) = (query.user_id, query.entreprise_id) {
        let emploi = service.get_by_pair(user_id, entreprise_id).await?;
        return Ok(Json(emploi.into_dto()).into_response());
    }

    let page = service
        .list(
            &Filters::page(query.skip, query.limit),
            query.user_id,
            query.entreprise_id,
        )
        .await?;

    Ok(Json(page.into_dto(Emploi::into_dto)).into_response())
}

#[utoipa::path(
    get,
    path = "/emplois/{id}",
    tag = EMPLOI_TAG,
    params(("id" = i32, Path, description = "Emploi ID")),
    responses(
        (status = 200, description = "The emploi", body = EmploiDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Emploi not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_emploi(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Emploi")?;

    let emploi = EmploiService::new(&state.db).get_by_id(id).await?;

    Ok(Json(emploi.into_dto()))
}

#[utoipa::path(
    patch,
    path = "/emplois/{id}",
    tag = EMPLOI_TAG,
    params(("id" = i32, Path, description = "Emploi ID")),
    request_body = UpdateEmploiDto,
    responses(
        (status = 200, description = "Emploi updated", body = EmploiDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "Emploi not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_emploi(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEmploiDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Emploi")?;
    let Json(payload) = payload?;

    let outcome = EmploiService::new(&state.db)
        .update(id, EmploiPatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, Emploi::into_dto))
}

/// Soft-delete an emploi, freeing the user/entreprise pair.
#[utoipa::path(
    delete,
    path = "/emplois/{id}",
    tag = EMPLOI_TAG,
    params(("id" = i32, Path, description = "Emploi ID")),
    responses(
        (status = 200, description = "Emploi deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Emploi not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_emploi(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Emploi")?;

    EmploiService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Emploi deleted successfully")))
}
