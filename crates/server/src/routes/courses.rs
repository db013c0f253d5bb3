use crate::{
    auth::Caller,
    dtos::catalog::{
        AddDisciplineRequest, ClassResponse, CourseClassesQuery, CourseDisciplineResponse,
        CourseQueryParams, CourseRequest, CourseResponse, WorkloadRequest,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::{class::ClassService, course::CourseService};
use uuid::Uuid;

/// List courses, optionally by type
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseQueryParams),
    responses((status = 200, description = "Courses ordered by name", body = [CourseResponse])),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    _caller: Caller,
    Query(params): Query<CourseQueryParams>,
) -> ApiResult<Json<Vec<CourseResponse>>> {
    let courses = CourseService::list(&state.db, params.course_type).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<CourseResponse>> {
    Ok(Json(CourseService::get(&state.db, id).await?.into()))
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Invalid course"),
        (status = 409, description = "Acronym already in use")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CourseRequest>,
) -> ApiResult<(StatusCode, Json<CourseResponse>)> {
    caller.require_admin()?;

    let course = CourseService::create(&state.db, body.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Acronym already in use")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<CourseRequest>,
) -> ApiResult<Json<CourseResponse>> {
    caller.require_admin()?;
    Ok(Json(CourseService::update(&state.db, id, body.into()).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 409, description = "Course still has classes or timetable slots")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CourseService::delete(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Disciplines of a course with their workloads
#[utoipa::path(
    get,
    path = "/courses/{id}/disciplines",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course disciplines", body = [CourseDisciplineResponse]),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn list_course_disciplines(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Vec<CourseDisciplineResponse>>> {
    let rows = CourseService::disciplines(&state.db, id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/courses/{id}/disciplines",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = AddDisciplineRequest,
    responses(
        (status = 201, description = "Discipline added", body = CourseDisciplineResponse),
        (status = 400, description = "Invalid workload"),
        (status = 409, description = "Discipline already in the course")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn add_course_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<Uuid>,
    Json(body): Json<AddDisciplineRequest>,
) -> ApiResult<(StatusCode, Json<CourseDisciplineResponse>)> {
    caller.require_admin()?;

    let link =
        CourseService::add_discipline(&state.db, id, body.discipline_id, body.workload).await?;
    Ok((StatusCode::CREATED, Json(link.into())))
}

#[utoipa::path(
    put,
    path = "/courses/{id}/disciplines/{discipline_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("discipline_id" = Uuid, Path, description = "Discipline ID")
    ),
    request_body = WorkloadRequest,
    responses(
        (status = 200, description = "Workload updated", body = CourseDisciplineResponse),
        (status = 404, description = "Discipline is not in the course")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn update_course_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, discipline_id)): Path<(Uuid, Uuid)>,
    Json(body): Json<WorkloadRequest>,
) -> ApiResult<Json<CourseDisciplineResponse>> {
    caller.require_admin()?;

    let link = CourseService::update_workload(&state.db, id, discipline_id, body.workload).await?;
    Ok(Json(link.into()))
}

#[utoipa::path(
    delete,
    path = "/courses/{id}/disciplines/{discipline_id}",
    params(
        ("id" = Uuid, Path, description = "Course ID"),
        ("discipline_id" = Uuid, Path, description = "Discipline ID")
    ),
    responses(
        (status = 204, description = "Discipline removed from the course"),
        (status = 404, description = "Discipline is not in the course")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn remove_course_discipline(
    State(state): State<AppState>,
    caller: Caller,
    Path((id, discipline_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<StatusCode> {
    caller.require_admin()?;
    CourseService::remove_discipline(&state.db, id, discipline_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Classes of a course; archived ones only on request
#[utoipa::path(
    get,
    path = "/courses/{id}/classes",
    params(("id" = Uuid, Path, description = "Course ID"), CourseClassesQuery),
    responses(
        (status = 200, description = "Classes of the course", body = [ClassResponse]),
        (status = 404, description = "Course not found")
    ),
    security(("jwt" = [])),
    tag = "Courses"
)]
pub async fn list_course_classes(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<Uuid>,
    Query(query): Query<CourseClassesQuery>,
) -> ApiResult<Json<Vec<ClassResponse>>> {
    let classes = ClassService::list_for_course(&state.db, id, query.include_archived).await?;
    Ok(Json(classes.into_iter().map(Into::into).collect()))
}
