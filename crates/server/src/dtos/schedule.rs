use chrono::NaiveTime;
use database::{
    entities::{class_schedule_detail, hour},
    services::schedule::{NewDetail, NewSchedule, ScheduleWithDetails, TimetableEntry},
};
use models::DayOfWeek;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetailResponse {
    pub id: Uuid,
    pub class_schedule_id: Uuid,
    pub discipline_id: Uuid,
    pub user_id: Option<Uuid>,
    pub hour_id: Uuid,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
}

impl From<class_schedule_detail::Model> for ScheduleDetailResponse {
    fn from(model: class_schedule_detail::Model) -> Self {
        Self {
            id: model.id,
            class_schedule_id: model.class_schedule_id,
            discipline_id: model.discipline_id,
            user_id: model.user_id,
            hour_id: model.hour_id,
            day_of_week: model.day_of_week,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    pub professor_id: Option<Uuid>,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
    pub hour_id: Uuid,
    #[schema(value_type = String, example = "07:30:00")]
    pub hour_start: NaiveTime,
    #[schema(value_type = String, example = "08:20:00")]
    pub hour_end: NaiveTime,
    pub details: Vec<ScheduleDetailResponse>,
}

impl From<ScheduleWithDetails> for ScheduleResponse {
    fn from(row: ScheduleWithDetails) -> Self {
        let ScheduleWithDetails {
            schedule,
            hour: hour::Model {
                hour_start,
                hour_end,
                ..
            },
            details,
        } = row;

        Self {
            id: schedule.id,
            calendar_id: schedule.calendar_id,
            class_id: schedule.class_id,
            course_id: schedule.course_id,
            discipline_id: schedule.discipline_id,
            professor_id: schedule.professor_id,
            day_of_week: schedule.day_of_week,
            hour_id: schedule.hour_id,
            hour_start,
            hour_end,
            details: details.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub calendar_id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    pub professor_id: Option<Uuid>,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
    pub hour_id: Uuid,
}

impl From<CreateScheduleRequest> for NewSchedule {
    fn from(req: CreateScheduleRequest) -> Self {
        Self {
            calendar_id: req.calendar_id,
            class_id: req.class_id,
            course_id: req.course_id,
            discipline_id: req.discipline_id,
            professor_id: req.professor_id,
            day_of_week: req.day_of_week,
            hour_id: req.hour_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetProfessorRequest {
    pub professor_id: Option<Uuid>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDetailRequest {
    pub discipline_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub hour_id: Option<Uuid>,
    #[schema(value_type = Option<String>, example = "segunda")]
    pub day_of_week: Option<DayOfWeek>,
}

impl From<CreateDetailRequest> for NewDetail {
    fn from(req: CreateDetailRequest) -> Self {
        Self {
            discipline_id: req.discipline_id,
            user_id: req.user_id,
            hour_id: req.hour_id,
            day_of_week: req.day_of_week,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleQueryParams {
    pub calendar_id: Option<Uuid>,
    pub class_id: Option<Uuid>,
    pub professor_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct TimetableQuery {
    pub calendar_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntryResponse {
    pub detail_id: Uuid,
    pub schedule_id: Uuid,
    pub calendar_id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
    #[schema(value_type = String, example = "07:30:00")]
    pub hour_start: NaiveTime,
    #[schema(value_type = String, example = "08:20:00")]
    pub hour_end: NaiveTime,
}

impl From<TimetableEntry> for TimetableEntryResponse {
    fn from(entry: TimetableEntry) -> Self {
        Self {
            detail_id: entry.detail.id,
            schedule_id: entry.schedule.id,
            calendar_id: entry.schedule.calendar_id,
            class_id: entry.schedule.class_id,
            course_id: entry.schedule.course_id,
            discipline_id: entry.detail.discipline_id,
            day_of_week: entry.detail.day_of_week,
            hour_start: entry.hour.hour_start,
            hour_end: entry.hour.hour_end,
        }
    }
}
