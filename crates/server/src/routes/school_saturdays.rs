use crate::{
    auth::Caller,
    dtos::calendar::{SchoolSaturdayQuery, SchoolSaturdayRequest, SchoolSaturdayResponse},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::school_saturday::SchoolSaturdayService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/school-saturdays",
    params(SchoolSaturdayQuery),
    responses((status = 200, description = "School Saturdays by date", body = [SchoolSaturdayResponse])),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn list_school_saturdays(
    State(state): State<AppState>,
    _caller: Caller,
    Query(query): Query<SchoolSaturdayQuery>,
) -> ApiResult<Json<Vec<SchoolSaturdayResponse>>> {
    let saturdays = match query.calendar_id {
        Some(calendar_id) => SchoolSaturdayService::list_for_calendar(&state.db, calendar_id).await?,
        None => SchoolSaturdayService::list(&state.db).await?,
    };
    Ok(Json(saturdays.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/school-saturdays",
    request_body = SchoolSaturdayRequest,
    responses(
        (status = 201, description = "School Saturday created", body = SchoolSaturdayResponse),
        (status = 400, description = "Date is not a Saturday"),
        (status = 409, description = "Saturday already registered")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn create_school_saturday(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<SchoolSaturdayRequest>,
) -> ApiResult<(StatusCode, Json<SchoolSaturdayResponse>)> {
    caller.require_admin()?;

    let saturday = SchoolSaturdayService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(saturday.into())))
}

#[utoipa::path(
    delete,
    path = "/school-saturdays/{id}",
    params(("id" = Uuid, Path, description = "School Saturday ID")),
    responses(
        (status = 204, description = "School Saturday deleted"),
        (status = 404, description = "School Saturday not found")
    ),
    security(("jwt" = [])),
    tag = "Calendars"
)]
pub async fn delete_school_saturday(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    SchoolSaturdayService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
