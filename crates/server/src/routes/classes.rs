use crate::{
    auth::Caller,
    dtos::catalog::{
        ClassCourseResponse, ClassResponse, CourseClassStatusRequest, CreateClassRequest,
        UpdateClassRequest,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::{
    class::{ClassService, NewClass},
    course::CourseService,
};
use uuid::Uuid;

/// Classes with at least one active course link
#[utoipa::path(
    get,
    path = "/classes",
    responses((status = 200, description = "Active classes", body = [ClassResponse])),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn list_active_classes(
    State(state): State<AppState>,
    _caller: Caller,
) -> ApiResult<Json<Vec<ClassResponse>>> {
    let classes = ClassService::list(&state.db, false).await?;
    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

/// Every class, archived links included
#[utoipa::path(
    get,
    path = "/classes-all",
    responses((status = 200, description = "All classes", body = [ClassResponse])),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn list_all_classes(
    State(state): State<AppState>,
    _caller: Caller,
) -> ApiResult<Json<Vec<ClassResponse>>> {
    let classes = ClassService::list(&state.db, true).await?;
    Ok(Json(classes.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/classes/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class found, archived or not", body = ClassResponse),
        (status = 404, description = "Class not found")
    ),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn get_class(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ClassResponse>> {
    Ok(Json(ClassService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassRequest,
    responses(
        (status = 201, description = "Class created", body = ClassResponse),
        (status = 400, description = "Invalid class"),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn create_class(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateClassRequest>,
) -> ApiResult<(StatusCode, Json<ClassResponse>)> {
    caller.require_admin()?;

    let class = ClassService::create(
        &state.db,
        NewClass {
            semester: body.semester,
            course_id: body.course_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(class.into())))
}

#[utoipa::path(
    put,
    path = "/classes/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    request_body = UpdateClassRequest,
    responses(
        (status = 200, description = "Class updated", body = ClassResponse),
        (status = 404, description = "Class not found")
    ),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn update_class(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateClassRequest>,
) -> ApiResult<Json<ClassResponse>> {
    caller.require_admin()?;

    ClassService::update(&state.db, id, &body.semester).await?;
    Ok(Json(ClassService::get(&state.db, id).await?.into()))
}

/// Attaches the class to another course as an active link
#[utoipa::path(
    post,
    path = "/classes/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Class ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    responses(
        (status = 201, description = "Class linked", body = ClassCourseResponse),
        (status = 404, description = "Class or course not found"),
        (status = 409, description = "Already linked")
    ),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn link_course(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<(StatusCode, Json<ClassCourseResponse>)> {
    caller.require_admin()?;

    let link = ClassService::link_course(&state.db, id, course_id).await?;
    let course = CourseService::get(&state.db, course_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ClassCourseResponse {
            course_class_id: link.id,
            is_active: link.is_active,
            course: course.into(),
        }),
    ))
}

/// Archives or restores the class within one course
#[utoipa::path(
    put,
    path = "/classes/{id}/courses/{course_id}",
    params(
        ("id" = Uuid, Path, description = "Class ID"),
        ("course_id" = Uuid, Path, description = "Course ID")
    ),
    request_body = CourseClassStatusRequest,
    responses(
        (status = 200, description = "Link updated", body = ClassCourseResponse),
        (status = 404, description = "Class is not linked to the course")
    ),
    security(("jwt" = [])),
    tag = "Classes"
)]
pub async fn set_course_status(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, course_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<CourseClassStatusRequest>,
) -> ApiResult<Json<ClassCourseResponse>> {
    caller.require_admin()?;

    let link = ClassService::set_active(&state.db, id, course_id, body.is_active).await?;
    let course = CourseService::get(&state.db, course_id).await?;
    Ok(Json(ClassCourseResponse {
        course_class_id: link.id,
        is_active: link.is_active,
        course: course.into(),
    }))
}
