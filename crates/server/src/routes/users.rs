use crate::{
    auth::Caller,
    dtos::{
        schedule::{TimetableEntryResponse, TimetableQuery},
        user::{CreateUserRequest, UpdateUserRequest, UserQueryParams, UserResponse},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::{schedule::ScheduleService, user::UserService};
use uuid::Uuid;

/// List users, optionally by access type
#[utoipa::path(
    get,
    path = "/users",
    params(UserQueryParams),
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 403, description = "Caller may not list users")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    caller: Caller,
    Query(params): Query<UserQueryParams>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    caller.require_validator()?;

    let users = UserService::list(&state.db, params.access_type).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// The user registered for the caller's token
#[utoipa::path(
    get,
    path = "/users/me",
    responses(
        (status = 200, description = "Caller", body = UserResponse),
        (status = 403, description = "Token subject is not registered")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn me(State(state): State<AppState>, caller: Caller) -> ApiResult<Json<UserResponse>> {
    Ok(Json(caller.user(&state).await?.into()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<UserResponse>> {
    caller.require_validator()?;
    Ok(Json(UserService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid user"),
        (status = 409, description = "Subject or email already registered")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    caller.require_admin()?;

    let user = UserService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    caller.require_admin()?;
    Ok(Json(UserService::update(&state.db, id, body.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    UserService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lessons taught by a user; teachers may only read their own
#[utoipa::path(
    get,
    path = "/users/{id}/timetable",
    params(("id" = Uuid, Path, description = "User ID"), TimetableQuery),
    responses(
        (status = 200, description = "Timetable ordered by day and hour", body = [TimetableEntryResponse]),
        (status = 403, description = "Not the caller's timetable")
    ),
    security(("jwt" = [])),
    tag = "Users"
)]
pub async fn timetable(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Query(query): Query<TimetableQuery>,
) -> ApiResult<Json<Vec<TimetableEntryResponse>>> {
    if caller.require_validator().is_err() && caller.user(&state).await?.id != id {
        return Err(ApiError::Forbidden);
    }

    let entries = ScheduleService::timetable(&state.db, id, query.calendar_id).await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
