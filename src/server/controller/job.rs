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
        job::{CreateJobDto, JobDto, JobListQuery, UpdateJobDto},
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::job::{CreateJobParams, Job, JobPatch},
        query::Filters,
        service::job::JobService,
        state::AppState,
        util::parse::parse_id,
    },
};

pub static JOB_TAG: &str = "jobs";

#[utoipa::path(
    post,
    path = "/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job created", body = JobDto),
        (status = 400, description = "Invalid job data", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let job = JobService::new(&state.db)
        .create(CreateJobParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}

/// List jobs, newest first, filtered by status and/or entreprise.
#[utoipa::path(
    get,
    path = "/jobs",
    tag = JOB_TAG,
    params(JobListQuery),
    responses(
        (status = 200, description = "Page of jobs", body = PageDto<JobDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;

    let filters = Filters::new(
        None,
        query.status.map(|status| status.as_str().to_string()),
        None,
        query.skip,
        query.limit,
    );
    let page = JobService::new(&state.db)
        .list(&filters, query.entreprise_id)
        .await?;

    Ok(Json(page.into_dto(Job::into_dto)))
}

#[utoipa::path(
    get,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "The job", body = JobDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Job not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Job")?;

    let job = JobService::new(&state.db).get_by_id(id).await?;

    Ok(Json(job.into_dto()))
}

#[utoipa::path(
    patch,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    request_body = UpdateJobDto,
    responses(
        (status = 200, description = "Job updated", body = JobDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "Job not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJobDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Job")?;
    let Json(payload) = payload?;

    let outcome = JobService::new(&state.db)
        .update(id, JobPatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, Job::into_dto))
}

#[utoipa::path(
    delete,
    path = "/jobs/{id}",
    tag = JOB_TAG,
    params(("id" = i32, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "Job not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Job")?;

    JobService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("Job deleted successfully")))
}
