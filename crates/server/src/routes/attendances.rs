use crate::{
    auth::Caller,
    dtos::attendance::{
        AttendanceQuery, AttendanceResponse, CreateAttendanceRequest, UpdateAttendanceRequest,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::attendance::AttendanceService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/attendances",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records by date", body = [AttendanceResponse]),
        (status = 400, description = "Invalid date range")
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn list_attendances(
    State(state): State<AppState>,
    _caller: Caller,
    Query(query): Query<AttendanceQuery>,
) -> ApiResult<Json<Vec<AttendanceResponse>>> {
    let records = AttendanceService::list(&state.db, query.into()).await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/attendances/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    responses(
        (status = 200, description = "Attendance found", body = AttendanceResponse),
        (status = 404, description = "Attendance not found")
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AttendanceResponse>> {
    Ok(Json(AttendanceService::get(&state.db, id).await?.into()))
}

/// Records attendance for one lesson on one date
#[utoipa::path(
    post,
    path = "/attendances",
    request_body = CreateAttendanceRequest,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceResponse),
        (status = 400, description = "Date, status or coordinates rejected"),
        (status = 403, description = "Caller is not a registered user"),
        (status = 409, description = "Attendance already recorded for the lesson and date")
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn create_attendance(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateAttendanceRequest>,
) -> ApiResult<(StatusCode, Json<AttendanceResponse>)> {
    let user = caller.user(&state).await?;

    let record = AttendanceService::record(&state.db, Some(user.id), body.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Corrects a record; allowed to its author and to administrators
#[utoipa::path(
    put,
    path = "/attendances/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    request_body = UpdateAttendanceRequest,
    responses(
        (status = 200, description = "Attendance updated", body = AttendanceResponse),
        (status = 403, description = "Caller did not record this attendance"),
        (status = 404, description = "Attendance not found")
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAttendanceRequest>,
) -> ApiResult<Json<AttendanceResponse>> {
    if !caller.is_admin() {
        let user = caller.user(&state).await?;
        let record = AttendanceService::get(&state.db, id).await?;
        if record.registered_by != Some(user.id) {
            return Err(ApiError::Forbidden);
        }
    }

    let record = AttendanceService::update(&state.db, id, body.into()).await?;
    Ok(Json(record.into()))
}

#[utoipa::path(
    delete,
    path = "/attendances/{id}",
    params(("id" = Uuid, Path, description = "Attendance ID")),
    responses(
        (status = 204, description = "Attendance deleted"),
        (status = 404, description = "Attendance not found")
    ),
    security(("jwt" = [])),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    AttendanceService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
