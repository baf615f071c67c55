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
        application::{
            ApplicationDto, ApplicationListQuery, CreateApplicationDto, UpdateApplicationDto,
        },
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::application::{Application, ApplicationPatch, CreateApplicationParams},
        query::Filters,
        service::application::ApplicationService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static APPLICATION_TAG: &str = "applications";

/// Apply to a job. A candidate holds at most one active application per job.
#[utoipa::path(
    post,
    path = "/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = MessageDto),
        (status = 409, description = "Already applied", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    payload: Result<Json<CreateApplicationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let application = ApplicationService::new(&state.db)
        .create(CreateApplicationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List applications, most recent first, for a job and/or a candidate.
#[utoipa::path(
    get,
    path = "/applications",
    tag = APPLICATION_TAG,
    params(ApplicationListQuery),
    responses(
        (status = 200, description = "Page of applications", body = PageDto<ApplicationDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    query: Result<Query<ApplicationListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let filters = Filters::new(
        None,
        query.status.map(|status| status.as_str().to_string()),
        None,
        query.skip,
        query.limit,
    );
    let page = ApplicationService::new(&state.db)
        .list(&filters, query.job_id, query.candidat_id)
        .await?;

    Ok(Json(page.into_dto(Application::into_dto)))
}

#[utoipa::path(
    get,
    path = "/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "The application", body = ApplicationDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Application not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Application")?;

    let application = ApplicationService::new(&state.db).get_by_id(id).await?;

    Ok(Json(application.into_dto()))
}

#[utoipa::path(
    patch,
    path = "/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "Application not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateApplicationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Application")?;
    let Json(payload) = payload?;

    let outcome = ApplicationService::new(&state.db)
        .update(id, ApplicationPatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, Application::into_dto))
}

#[utoipa::path(
    delete,
    path = "/applications/{id}",
    tag = APPLICATION_TAG,
    params(("id" = i32, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Application not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Application")?;

    ApplicationService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Application deleted successfully")))
}
