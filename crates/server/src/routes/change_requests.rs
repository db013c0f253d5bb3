use crate::{
    auth::Caller,
    dtos::change_request::{
        ChangeRequestQuery, ChangeRequestResponse, CreateChangeRequestRequest,
        ValidateChangeRequestRequest,
    },
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::change_request::{ChangeRequestFilter, ChangeRequestService};
use uuid::Uuid;

/// Change requests, newest first. Teachers only see their own.
#[utoipa::path(
    get,
    path = "/change-requests",
    params(ChangeRequestQuery),
    responses((status = 200, description = "Change requests", body = [ChangeRequestResponse])),
    security(("jwt" = [])),
    tag = "Change requests"
)]
pub async fn list_change_requests(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<ChangeRequestQuery>,
) -> ApiResult<Json<Vec<ChangeRequestResponse>>> {
    let user_id = if caller.require_validator().is_ok() {
        query.user_id
    } else {
        Some(caller.user(&state).await?.id)
    };

    let requests = ChangeRequestService::list(
        &state.db,
        ChangeRequestFilter {
            user_id,
            validated: query.validated,
            change_type: query.change_type,
        },
    )
    .await?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/change-requests/{id}",
    params(("id" = Uuid, Path, description = "Change request ID")),
    responses(
        (status = 200, description = "Change request found", body = ChangeRequestResponse),
        (status = 403, description = "Not the caller's request"),
        (status = 404, description = "Change request not found")
    ),
    security(("jwt" = [])),
    tag = "Change requests"
)]
pub async fn get_change_request(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ChangeRequestResponse>> {
    let request = ChangeRequestService::get(&state.db, id).await?;

    if caller.require_validator().is_err() && caller.user(&state).await?.id != request.user_id {
        return Err(ApiError::Forbidden);
    }
    Ok(Json(request.into()))
}

/// Opens a pending request on behalf of the caller
#[utoipa::path(
    post,
    path = "/change-requests",
    request_body = CreateChangeRequestRequest,
    responses(
        (status = 201, description = "Change request created", body = ChangeRequestResponse),
        (status = 400, description = "Invalid quantity or archived class"),
        (status = 403, description = "Caller is not a registered user")
    ),
    security(("jwt" = [])),
    tag = "Change requests"
)]
pub async fn create_change_request(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateChangeRequestRequest>,
) -> ApiResult<(StatusCode, Json<ChangeRequestResponse>)> {
    let user = caller.user(&state).await?;

    let request = ChangeRequestService::create(&state.db, user.id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(request.into())))
}

/// Approves (1) or rejects (2) a pending request; each request is
/// validated once
#[utoipa::path(
    put,
    path = "/change-requests/{id}/validation",
    params(("id" = Uuid, Path, description = "Change request ID")),
    request_body = ValidateChangeRequestRequest,
    responses(
        (status = 200, description = "Change request validated", body = ChangeRequestResponse),
        (status = 400, description = "Decision must be 1 or 2"),
        (status = 403, description = "Caller may not validate requests"),
        (status = 404, description = "Change request not found"),
        (status = 409, description = "Change request was already validated")
    ),
    security(("jwt" = [])),
    tag = "Change requests"
)]
pub async fn validate_change_request(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<ValidateChangeRequestRequest>,
) -> ApiResult<Json<ChangeRequestResponse>> {
    caller.require_validator()?;

    let request =
        ChangeRequestService::validate(&state.db, id, body.validated, body.observation_coordinator)
            .await?;
    Ok(Json(request.into()))
}

/// Withdraws one of the caller's pending requests
#[utoipa::path(
    delete,
    path = "/change-requests/{id}",
    params(("id" = Uuid, Path, description = "Change request ID")),
    responses(
        (status = 204, description = "Change request withdrawn"),
        (status = 403, description = "Not the caller's request"),
        (status = 404, description = "Change request not found"),
        (status = 409, description = "Change request was already validated")
    ),
    security(("jwt" = [])),
    tag = "Change requests"
)]
pub async fn delete_change_request(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let user = caller.user(&state).await?;
    ChangeRequestService::delete(&state.db, id, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
