use crate::{
    auth::Caller,
    dtos::catalog::{DisciplineRequest, DisciplineResponse},
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::discipline::DisciplineService;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/disciplines",
    responses((status = 200, description = "Disciplines ordered by name", body = [DisciplineResponse])),
    security(("jwt" = [])),
    tag = "Disciplines"
)]
pub async fn list_disciplines(
    State(state): State<AppState>,
    _caller: Caller,
) -> ApiResult<Json<Vec<DisciplineResponse>>> {
    let disciplines = DisciplineService::list(&state.db).await?;
    Ok(Json(disciplines.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/disciplines/{id}",
    params(("id" = Uuid, Path, description = "Discipline ID")),
    responses(
        (status = 200, description = "Discipline found", body = DisciplineResponse),
        (status = 404, description = "Discipline not found")
    ),
    security(("jwt" = [])),
    tag = "Disciplines"
)]
pub async fn get_discipline(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DisciplineResponse>> {
    Ok(Json(DisciplineService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/disciplines",
    request_body = DisciplineRequest,
    responses(
        (status = 201, description = "Discipline created", body = DisciplineResponse),
        (status = 400, description = "Invalid discipline")
    ),
    security(("jwt" = [])),
    tag = "Disciplines"
)]
pub async fn create_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<DisciplineRequest>,
) -> ApiResult<(StatusCode, Json<DisciplineResponse>)> {
    caller.require_admin()?;

    let discipline = DisciplineService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(discipline.into())))
}

#[utoipa::path(
    put,
    path = "/disciplines/{id}",
    params(("id" = Uuid, Path, description = "Discipline ID")),
    request_body = DisciplineRequest,
    responses(
        (status = 200, description = "Discipline updated", body = DisciplineResponse),
        (status = 404, description = "Discipline not found")
    ),
    security(("jwt" = [])),
    tag = "Disciplines"
)]
pub async fn update_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<DisciplineRequest>,
) -> ApiResult<Json<DisciplineResponse>> {
    caller.require_admin()?;
    Ok(Json(
        DisciplineService::update(&state.db, id, body.into())
            .await?
            .into(),
    ))
}

#[utoipa::path(
    delete,
    path = "/disciplines/{id}",
    params(("id" = Uuid, Path, description = "Discipline ID")),
    responses(
        (status = 204, description = "Discipline deleted"),
        (status = 404, description = "Discipline not found"),
        (status = 409, description = "Discipline is used by a timetable slot")
    ),
    security(("jwt" = [])),
    tag = "Disciplines"
)]
pub async fn delete_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    DisciplineService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
