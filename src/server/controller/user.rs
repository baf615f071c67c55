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
        user::{CreateUserDto, UpdateUserDto, UserDto, UserListQuery, UserStatus},
    },
    server::{
        controller::patch_response,
        error::AppError,
        model::user::{CreateUserParams, User, UserPatch},
        query::Filters,
        service::user::UserService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "users";

/// Create a new user.
///
/// The email is lower-cased before it is stored and must not belong to another active
/// user. The password hash is stored as given and never returned.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Malformed body or blank required field
/// - `409 Conflict` - Email already used by an active user
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = MessageDto),
        (status = 409, description = "Email already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let user = UserService::new(&state.db)
        .create(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List users.
///
/// Filters by role and status and pages with `skip`/`limit`. When `email` is given the
/// single matching user is returned instead of a page (404 when there is none).
///
/// # Returns
/// - `200 OK` - A page of users, or one user for an email lookup
/// - `400 Bad Request` - Invalid query parameter
/// - `404 Not Found` - No active user with the requested email
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users, or a single user when filtering by email", body = PageDto<UserDto>),
        (status = 400, description = "Invalid query parameter", body = MessageDto),
        (status = 404, description = "No user with this email", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    query: Result<Query<UserListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let service = UserService::new(&state.db);

    if let Some(email) = query.email.filter(|email| !email.trim().is_empty()) {
        let user = service.get_by_email(&email).await?;
        return Ok(Json(user.into_dto()).into_response());
    }

    let filters = Filters::new(
        query.role.map(|role| role.as_str().to_string()),
        query.status.map(|status| status.as_str().to_string()),
        None,
        query.skip,
        query.limit,
    );
    let page = service.list(&filters).await?;

    Ok(Json(page.into_dto(User::into_dto)).into_response())
}

/// Get a user by ID.
///
/// # Returns
/// - `200 OK` - The user
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - Unknown or deleted user
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(Json(user.into_dto()))
}

/// Partially update a user.
///
/// Only fields present and non-null in the body are considered. When every one of them
/// already holds the requested value nothing is written and 204 is returned.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `204 No Content` - Nothing changed
/// - `400 Bad Request` - Empty patch, unknown field or invalid value
/// - `404 Not Found` - Unknown or deleted user
/// - `409 Conflict` - New email already used by an active user
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 204, description = "No field changed"),
        (status = 400, description = "Invalid patch", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 409, description = "Email already in use", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;
    let Json(payload) = payload?;

    let outcome = UserService::new(&state.db)
        .update(id, UserPatch::from_dto(payload))
        .await?;

    Ok(patch_response(outcome, User::into_dto))
}

/// Suspend a user account.
#[utoipa::path(
    patch,
    path = "/users/{id}/suspend",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User suspended", body = UserDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn suspend_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;

    let user = UserService::new(&state.db)
        .set_status(id, UserStatus::Suspended)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Reactivate a suspended user account.
#[utoipa::path(
    patch,
    path = "/users/{id}/activate",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User activated", body = UserDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;

    let user = UserService::new(&state.db)
        .set_status(id, UserStatus::Active)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Delete a user.
///
/// Users are soft-deleted: the row is kept with its deletion timestamp and the email
/// becomes available again.
///
/// # Returns
/// - `200 OK` - Success envelope
/// - `400 Bad Request` - Malformed ID
/// - `404 Not Found` - Unknown or already deleted user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Malformed ID", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "User")?;

    UserService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::success("User deleted successfully")))
}
