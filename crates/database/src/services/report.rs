//! Read-only aggregations over attendance, change requests and workloads

use super::fetch;
use crate::entities::{
    attendance, calendar, class_change_request, class_schedule, class_schedule_detail, course,
    course_discipline, user,
};
use crate::error::ServiceResult;
use models::{AttendanceStatus, ChangeType, ValidationStatus};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
    sea_query::{Expr, Func},
};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AttendanceTotal {
    pub status: AttendanceStatus,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ProfessorAbsences {
    pub user_id: Uuid,
    pub name: String,
    pub absences: i64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ChangeRequestTotal {
    pub change_type: ChangeType,
    pub validated: ValidationStatus,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CourseWorkload {
    pub course_id: Uuid,
    pub acronym: String,
    pub name: String,
    pub disciplines: i64,
    pub workload: i64,
}

pub struct ReportService;

impl ReportService {
    /// Attendance counts per status for a calendar, optionally one class
    pub async fn attendance_totals(
        db: &DatabaseConnection,
        calendar_id: Uuid,
        class_id: Option<Uuid>,
    ) -> ServiceResult<Vec<AttendanceTotal>> {
        fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;

        let mut query = attendance::Entity::find()
            .select_only()
            .column(attendance::Column::Status)
            .column_as(
                Expr::col((attendance::Entity, attendance::Column::Id)).count(),
                "total",
            )
            .join(
                JoinType::InnerJoin,
                attendance::Relation::ClassScheduleDetail.def(),
            )
            .join(
                JoinType::InnerJoin,
                class_schedule_detail::Relation::ClassSchedule.def(),
            )
            .filter(class_schedule::Column::CalendarId.eq(calendar_id));
        if let Some(class_id) = class_id {
            query = query.filter(class_schedule::Column::ClassId.eq(class_id));
        }

        let mut totals = query
            .group_by(attendance::Column::Status)
            .into_model::<AttendanceTotal>()
            .all(db)
            .await?;

        totals.sort_by_key(|t| t.status.to_string());
        Ok(totals)
    }

    /// Absences recorded against each teacher's lessons in a calendar,
    /// highest first
    pub async fn absences_by_professor(
        db: &DatabaseConnection,
        calendar_id: Uuid,
    ) -> ServiceResult<Vec<ProfessorAbsences>> {
        fetch::<calendar::Entity, _>(db, calendar_id, "calendar").await?;

        let mut rows = attendance::Entity::find()
            .select_only()
            .column_as(user::Column::Id, "user_id")
            .column(user::Column::Name)
            .column_as(Expr::col((attendance::Entity, attendance::Column::Id)).count(), "absences")
            .join(
                JoinType::InnerJoin,
                attendance::Relation::ClassScheduleDetail.def(),
            )
            .join(
                JoinType::InnerJoin,
                class_schedule_detail::Relation::ClassSchedule.def(),
            )
            .join(JoinType::InnerJoin, class_schedule_detail::Relation::User.def())
            .filter(class_schedule::Column::CalendarId.eq(calendar_id))
            .filter(attendance::Column::Status.eq(AttendanceStatus::Absent))
            .group_by(user::Column::Id)
            .group_by(user::Column::Name)
            .into_model::<ProfessorAbsences>()
            .all(db)
            .await?;

        rows.sort_by(|a, b| b.absences.cmp(&a.absences).then_with(|| a.name.cmp(&b.name)));
        Ok(rows)
    }

    /// Change requests counted by type and decision
    pub async fn change_request_totals(
        db: &DatabaseConnection,
        user_id: Option<Uuid>,
    ) -> ServiceResult<Vec<ChangeRequestTotal>> {
        let mut query = class_change_request::Entity::find()
            .select_only()
            .column(class_change_request::Column::ChangeType)
            .column(class_change_request::Column::Validated)
            .column_as(
                Expr::col(class_change_request::Column::Id).count(),
                "total",
            );
        if let Some(user_id) = user_id {
            query = query.filter(class_change_request::Column::UserId.eq(user_id));
        }

        Ok(query
            .group_by(class_change_request::Column::ChangeType)
            .group_by(class_change_request::Column::Validated)
            .order_by_asc(class_change_request::Column::ChangeType)
            .order_by_asc(class_change_request::Column::Validated)
            .into_model::<ChangeRequestTotal>()
            .all(db)
            .await?)
    }

    /// Sum of discipline workloads per course; courses without disciplines
    /// report zero
    pub async fn course_workloads(db: &DatabaseConnection) -> ServiceResult<Vec<CourseWorkload>> {
        Ok(course::Entity::find()
            .select_only()
            .column_as(course::Column::Id, "course_id")
            .column(course::Column::Acronym)
            .column(course::Column::Name)
            .column_as(
                Expr::col((course_discipline::Entity, course_discipline::Column::Id)).count(),
                "disciplines",
            )
            .column_as(
                Expr::expr(Func::coalesce([
                    Expr::col((course_discipline::Entity, course_discipline::Column::Workload))
                        .sum(),
                    Expr::val(0).into(),
                ])),
                "workload",
            )
            .join(JoinType::LeftJoin, course::Relation::CourseDisciplines.def())
            .group_by(course::Column::Id)
            .group_by(course::Column::Acronym)
            .group_by(course::Column::Name)
            .order_by_asc(course::Column::Acronym)
            .into_model::<CourseWorkload>()
            .all(db)
            .await?)
    }
}
