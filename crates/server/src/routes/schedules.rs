use crate::{
    auth::Caller,
    dtos::schedule::{
        CreateDetailRequest, CreateScheduleRequest, ScheduleDetailResponse, ScheduleQueryParams,
        ScheduleResponse, SetProfessorRequest,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::schedule::{ScheduleFilter, ScheduleService};
use uuid::Uuid;

/// Timetable slots ordered by weekday then hour
#[utoipa::path(
    get,
    path = "/schedules",
    params(ScheduleQueryParams),
    responses((status = 200, description = "Timetable slots", body = [ScheduleResponse])),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    _caller: Caller,
    Query(params): Query<ScheduleQueryParams>,
) -> ApiResult<Json<Vec<ScheduleResponse>>> {
    let schedules = ScheduleService::list(
        &state.db,
        ScheduleFilter {
            calendar_id: params.calendar_id,
            class_id: params.class_id,
            professor_id: params.professor_id,
        },
    )
    .await?;
    Ok(Json(schedules.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/schedules/{id}",
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Timetable slot with its details", body = ScheduleResponse),
        (status = 404, description = "Schedule not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ScheduleResponse>> {
    Ok(Json(ScheduleService::get(&state.db, id).await?.into()))
}

/// Creates a slot and its first detail
#[utoipa::path(
    post,
    path = "/schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Schedule created", body = ScheduleResponse),
        (status = 400, description = "Class, course or discipline do not fit together"),
        (status = 409, description = "Slot already taken")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateScheduleRequest>,
) -> ApiResult<(StatusCode, Json<ScheduleResponse>)> {
    caller.require_admin()?;

    let schedule = ScheduleService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(schedule.into())))
}

#[utoipa::path(
    put,
    path = "/schedules/{id}/professor",
    params(("id" = Uuid, Path, description = "Schedule ID")),
    request_body = SetProfessorRequest,
    responses(
        (status = 200, description = "Professor reassigned", body = ScheduleResponse),
        (status = 404, description = "Schedule or professor not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn set_professor(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<SetProfessorRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    caller.require_admin()?;

    let schedule = ScheduleService::set_professor(&state.db, id, body.professor_id).await?;
    Ok(Json(schedule.into()))
}

#[utoipa::path(
    delete,
    path = "/schedules/{id}",
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 204, description = "Schedule deleted with its details"),
        (status = 404, description = "Schedule not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    ScheduleService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/schedules/{id}/details",
    params(("id" = Uuid, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Details of the slot", body = [ScheduleDetailResponse]),
        (status = 404, description = "Schedule not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn list_details(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<ScheduleDetailResponse>>> {
    let schedule = ScheduleService::get(&state.db, id).await?;
    Ok(Json(schedule.details.into_iter().map(Into::into).collect()))
}

/// Adds a detail; omitted fields are copied from the slot
#[utoipa::path(
    post,
    path = "/schedules/{id}/details",
    params(("id" = Uuid, Path, description = "Schedule ID")),
    request_body = CreateDetailRequest,
    responses(
        (status = 201, description = "Detail created", body = ScheduleDetailResponse),
        (status = 404, description = "Schedule not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn add_detail(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<CreateDetailRequest>,
) -> ApiResult<(StatusCode, Json<ScheduleDetailResponse>)> {
    caller.require_admin()?;

    let detail = ScheduleService::add_detail(&state.db, id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(detail.into())))
}

#[utoipa::path(
    get,
    path = "/schedule-details/{id}",
    params(("id" = Uuid, Path, description = "Schedule detail ID")),
    responses(
        (status = 200, description = "Detail found", body = ScheduleDetailResponse),
        (status = 404, description = "Detail not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn get_detail(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ScheduleDetailResponse>> {
    Ok(Json(ScheduleService::get_detail(&state.db, id).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/schedule-details/{id}",
    params(("id" = Uuid, Path, description = "Schedule detail ID")),
    responses(
        (status = 204, description = "Detail deleted with its attendance"),
        (status = 404, description = "Detail not found")
    ),
    security(("jwt" = [])),
    tag = "Schedules"
)]
pub async fn delete_detail(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    ScheduleService::delete_detail(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
