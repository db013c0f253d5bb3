use crate::{
    auth::Caller,
    dtos::catalog::{HourRequest, HourResponse},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::hour::HourService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/hours",
    responses((status = 200, description = "Hours ordered by start", body = [HourResponse])),
    security(("jwt" = [])),
    tag = "Hours"
)]
pub async fn list_hours(
    State(state): State<AppState>,
    _caller: Caller,
) -> ApiResult<Json<Vec<HourResponse>>> {
    let hours = HourService::list(&state.db).await?;
    Ok(Json(hours.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/hours/{id}",
    params(("id" = Uuid, Path, description = "Hour ID")),
    responses(
        (status = 200, description = "Hour found", body = HourResponse),
        (status = 404, description = "Hour not found")
    ),
    security(("jwt" = [])),
    tag = "Hours"
)]
pub async fn get_hour(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<HourResponse>> {
    Ok(Json(HourService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/hours",
    request_body = HourRequest,
    responses(
        (status = 201, description = "Hour created", body = HourResponse),
        (status = 400, description = "End is not after start")
    ),
    security(("jwt" = [])),
    tag = "Hours"
)]
pub async fn create_hour(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<HourRequest>,
) -> ApiResult<(StatusCode, Json<HourResponse>)> {
    caller.require_admin()?;

    let hour = HourService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(hour.into())))
}

#[utoipa::path(
    put,
    path = "/hours/{id}",
    params(("id" = Uuid, Path, description = "Hour ID")),
    request_body = HourRequest,
    responses(
        (status = 200, description = "Hour updated", body = HourResponse),
        (status = 400, description = "End is not after start"),
        (status = 404, description = "Hour not found")
    ),
    security(("jwt" = [])),
    tag = "Hours"
)]
pub async fn update_hour(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<HourRequest>,
) -> ApiResult<Json<HourResponse>> {
    caller.require_admin()?;
    Ok(Json(HourService::update(&state.db, id, body.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/hours/{id}",
    params(("id" = Uuid, Path, description = "Hour ID")),
    responses(
        (status = 204, description = "Hour deleted"),
        (status = 404, description = "Hour not found"),
        (status = 409, description = "Hour is used by a timetable slot")
    ),
    security(("jwt" = [])),
    tag = "Hours"
)]
pub async fn delete_hour(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    HourService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
