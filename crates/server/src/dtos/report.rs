use database::services::report::{
    AttendanceTotal, ChangeRequestTotal, CourseWorkload, ProfessorAbsences,
};
use models::{AttendanceStatus, ChangeType, ValidationStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReportQuery {
    pub calendar_id: Uuid,
    pub class_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CalendarReportQuery {
    pub calendar_id: Uuid,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestReportQuery {
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceTotalResponse {
    #[schema(value_type = String, example = "falta")]
    pub status: AttendanceStatus,
    pub total: i64,
}

impl From<AttendanceTotal> for AttendanceTotalResponse {
    fn from(row: AttendanceTotal) -> Self {
        Self {
            status: row.status,
            total: row.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorAbsencesResponse {
    pub user_id: Uuid,
    pub name: String,
    pub absences: i64,
}

impl From<ProfessorAbsences> for ProfessorAbsencesResponse {
    fn from(row: ProfessorAbsences) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name,
            absences: row.absences,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChangeRequestTotalResponse {
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "anteposicao")]
    pub change_type: ChangeType,
    #[schema(value_type = i16, example = 1)]
    pub validated: ValidationStatus,
    pub total: i64,
}

impl From<ChangeRequestTotal> for ChangeRequestTotalResponse {
    fn from(row: ChangeRequestTotal) -> Self {
        Self {
            change_type: row.change_type,
            validated: row.validated,
            total: row.total,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseWorkloadResponse {
    pub course_id: Uuid,
    pub acronym: String,
    pub name: String,
    pub disciplines: i64,
    pub workload: i64,
}

impl From<CourseWorkload> for CourseWorkloadResponse {
    fn from(row: CourseWorkload) -> Self {
        Self {
            course_id: row.course_id,
            acronym: row.acronym,
            name: row.name,
            disciplines: row.disciplines,
            workload: row.workload,
        }
    }
}
