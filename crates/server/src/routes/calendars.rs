use crate::{
    auth::Caller,
    dtos::calendar::{
        CalendarDetailsResponse, CalendarQueryParams, CalendarResponse, CreateCalendarRequest,
        UpdateCalendarRequest,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::calendar::CalendarService;
use uuid::Uuid;

/// Calendars, most recent term first
#[utoipa::path(
    get,
    path = "/calendars",
    params(CalendarQueryParams),
    responses((status = 200, description = "Calendars", body = [CalendarResponse])),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn list_calendars(
    State(state): State<AppState>,
    _caller: Caller,
    Query(params): Query<CalendarQueryParams>,
) -> ApiResult<Json<Vec<CalendarResponse>>> {
    let calendars = CalendarService::list(&state.db, params.year, params.period).await?;
    Ok(Json(calendars.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/calendars/{id}",
    params(("id" = Uuid, Path, description = "Calendar ID")),
    responses(
        (status = 200, description = "Calendar with its classes, courses and Saturdays", body = CalendarDetailsResponse),
        (status = 404, description = "Calendar not found")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn get_calendar(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CalendarDetailsResponse>> {
    Ok(Json(CalendarService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/calendars",
    request_body = CreateCalendarRequest,
    responses(
        (status = 201, description = "Calendar created", body = CalendarDetailsResponse),
        (status = 400, description = "Invalid type, year or period"),
        (status = 409, description = "Calendar already exists for the term")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn create_calendar(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateCalendarRequest>,
) -> ApiResult<(StatusCode, Json<CalendarDetailsResponse>)> {
    caller.require_admin()?;

    let calendar = CalendarService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(calendar.into())))
}

#[utoipa::path(
    put,
    path = "/calendars/{id}",
    params(("id" = Uuid, Path, description = "Calendar ID")),
    request_body = UpdateCalendarRequest,
    responses(
        (status = 200, description = "Calendar updated", body = CalendarResponse),
        (status = 404, description = "Calendar not found")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn update_calendar(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCalendarRequest>,
) -> ApiResult<Json<CalendarResponse>> {
    caller.require_admin()?;

    let calendar =
        CalendarService::update(&state.db, id, &body.calendar_type, body.year, body.period)
            .await?;
    Ok(Json(calendar.into()))
}

/// Deletes the calendar and its timetable; classes and courses are kept
#[utoipa::path(
    delete,
    path = "/calendars/{id}",
    params(("id" = Uuid, Path, description = "Calendar ID")),
    responses(
        (status = 204, description = "Calendar deleted"),
        (status = 404, description = "Calendar not found")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn delete_calendar(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/calendars/{id}/classes/{class_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("class_id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Class added"),
        (status = 404, description = "Calendar or class not found"),
        (status = 409, description = "Class already in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn add_class(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, class_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::add_class(&state.db, id, class_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/calendars/{id}/classes/{class_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("class_id" = Uuid, Path, description = "Class ID")
    ),
    responses(
        (status = 204, description = "Class removed"),
        (status = 404, description = "Class is not in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn remove_class(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, class_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::remove_class(&state.db, id, class_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/calendars/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course added"),
        (status = 404, description = "Calendar or course not found"),
        (status = 409, description = "Course already in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn add_course(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::add_course(&state.db, id, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/calendars/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course removed"),
        (status = 404, description = "Course is not in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn remove_course(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::remove_course(&state.db, id, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/calendars/{id}/saturdays/{saturday_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("saturday_id" = Uuid, Path, description = "School Saturday ID")
    ),
    responses(
        (status = 204, description = "Saturday attached"),
        (status = 404, description = "Calendar or Saturday not found"),
        (status = 409, description = "Saturday already in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn attach_saturday(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, saturday_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::attach_saturday(&state.db, id, saturday_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/calendars/{id}/saturdays/{saturday_id}",
    params(
        ("id" = Uuid, Path, description = "Calendar ID"),
        ("saturday_id" = Uuid, Path, description = "School Saturday ID")
    ),
    responses(
        (status = 204, description = "Saturday detached"),
        (status = 404, description = "Saturday is not in the calendar")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn detach_saturday(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, saturday_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CalendarService::detach_saturday(&state.db, id, saturday_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
