use crate::{
    auth::Caller,
    dtos::report::{
        AttendanceReportQuery, AttendanceTotalResponse, CalendarReportQuery,
        ChangeRequestReportQuery, ChangeRequestTotalResponse, CourseWorkloadResponse,
        ProfessorAbsencesResponse,
    },
    error::ApiResult,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
};
use database::services::report::ReportService;

/// Attendance counts per status in a calendar
#[utoipa::path(
    get,
    path = "/reports/attendance",
    params(AttendanceReportQuery),
    responses(
        (status = 200, description = "Totals by status", body = [AttendanceTotalResponse]),
        (status = 404, description = "Calendar not found")
    ),
    security(("jwt" = [])),
    tag = "Reports"
)]
pub async fn attendance_report(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<AttendanceReportQuery>,
) -> ApiResult<Json<Vec<AttendanceTotalResponse>>> {
    caller.require_validator()?;

    let rows = ReportService::attendance_totals(&state.db, query.calendar_id, query.class_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/absences-by-professor",
    params(CalendarReportQuery),
    responses(
        (status = 200, description = "Absences per professor, highest first", body = [ProfessorAbsencesResponse]),
        (status = 404, description = "Calendar not found")
    ),
    security(("jwt" = [])),
    tag = "Reports"
)]
pub async fn absences_by_professor(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<CalendarReportQuery>,
) -> ApiResult<Json<Vec<ProfessorAbsencesResponse>>> {
    caller.require_validator()?;

    let rows = ReportService::absences_by_professor(&state.db, query.calendar_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/change-requests",
    params(ChangeRequestReportQuery),
    responses((status = 200, description = "Counts by type and decision", body = [ChangeRequestTotalResponse])),
    security(("jwt" = [])),
    tag = "Reports"
)]
pub async fn change_request_report(
    State(state): State<AppState>,
    caller: Caller,
    Query(query): Query<ChangeRequestReportQuery>,
) -> ApiResult<Json<Vec<ChangeRequestTotalResponse>>> {
    caller.require_validator()?;

    let rows = ReportService::change_request_totals(&state.db, query.user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/reports/course-workload",
    responses((status = 200, description = "Discipline workload per course", body = [CourseWorkloadResponse])),
    security(("jwt" = [])),
    tag = "Reports"
)]
pub async fn course_workload_report(
    State(state): State<AppState>,
    caller: Caller,
) -> ApiResult<Json<Vec<CourseWorkloadResponse>>> {
    caller.require_validator()?;

    let rows = ReportService::course_workloads(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
