use crate::{
    auth::Caller,
    dtos::calendar::{HolidayQuery, HolidayRequest, HolidayResponse},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::holiday::HolidayService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/holidays",
    params(HolidayQuery),
    responses((status = 200, description = "Holidays by date", body = [HolidayResponse])),
    security(("jwt" = [])),
    tag = "Holidays"
)]
pub async fn list_holidays(
    State(state): State<AppState>,
    _caller: Caller,
    Query(query): Query<HolidayQuery>,
) -> ApiResult<Json<Vec<HolidayResponse>>> {
    let holidays = HolidayService::list(&state.db, query.year).await?;
    Ok(Json(holidays.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/holidays/{id}",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    responses(
        (status = 200, description = "Holiday found", body = HolidayResponse),
        (status = 404, description = "Holiday not found")
    ),
    security(("jwt" = [])),
    tag = "Holidays"
)]
pub async fn get_holiday(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<HolidayResponse>> {
    Ok(Json(HolidayService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/holidays",
    request_body = HolidayRequest,
    responses(
        (status = 201, description = "Holiday created", body = HolidayResponse),
        (status = 400, description = "Invalid holiday")
    ),
    security(("jwt" = [])),
    tag = "Holidays"
)]
pub async fn create_holiday(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<HolidayRequest>,
) -> ApiResult<(StatusCode, Json<HolidayResponse>)> {
    caller.require_admin()?;

    let holiday = HolidayService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(holiday.into())))
}

#[utoipa::path(
    put,
    path = "/holidays/{id}",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    request_body = HolidayRequest,
    responses(
        (status = 200, description = "Holiday updated", body = HolidayResponse),
        (status = 404, description = "Holiday not found")
    ),
    security(("jwt" = [])),
    tag = "Holidays"
)]
pub async fn update_holiday(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<HolidayRequest>,
) -> ApiResult<Json<HolidayResponse>> {
    caller.require_admin()?;
    Ok(Json(HolidayService::update(&state.db, id, body.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/holidays/{id}",
    params(("id" = Uuid, Path, description = "Holiday ID")),
    responses(
        (status = 204, description = "Holiday deleted"),
        (status = 404, description = "Holiday not found")
    ),
    security(("jwt" = [])),
    tag = "Holidays"
)]
pub async fn delete_holiday(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    HolidayService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
