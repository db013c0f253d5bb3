use chrono::NaiveDate;
use database::{
    entities::{calendar, holiday, school_saturday},
    services::{
        calendar::{CalendarDetails, NewCalendar},
        holiday::NewHoliday,
        school_saturday::NewSchoolSaturday,
    },
};
use models::{DayOfWeek, HolidayType};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::catalog::CourseResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub id: Uuid,
    pub calendar_type: String,
    pub year: i32,
    pub period: i16,
}

impl From<calendar::Model> for CalendarResponse {
    fn from(model: calendar::Model) -> Self {
        Self {
            id: model.id,
            calendar_type: model.calendar_type,
            year: model.year,
            period: model.period,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarClassResponse {
    pub id: Uuid,
    pub semester: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CalendarDetailsResponse {
    #[serde(flatten)]
    pub calendar: CalendarResponse,
    pub classes: Vec<CalendarClassResponse>,
    pub courses: Vec<CourseResponse>,
    pub saturdays: Vec<SchoolSaturdayResponse>,
}

impl From<CalendarDetails> for CalendarDetailsResponse {
    fn from(details: CalendarDetails) -> Self {
        Self {
            calendar: details.calendar.into(),
            classes: details
                .classes
                .into_iter()
                .map(|class| CalendarClassResponse {
                    id: class.id,
                    semester: class.semester,
                })
                .collect(),
            courses: details.courses.into_iter().map(Into::into).collect(),
            saturdays: details.saturdays.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarRequest {
    pub calendar_type: String,
    pub year: i32,
    pub period: i16,
    #[serde(default)]
    pub class_ids: Vec<Uuid>,
    #[serde(default)]
    pub course_ids: Vec<Uuid>,
}

impl From<CreateCalendarRequest> for NewCalendar {
    fn from(req: CreateCalendarRequest) -> Self {
        Self {
            calendar_type: req.calendar_type,
            year: req.year,
            period: req.period,
            class_ids: req.class_ids,
            course_ids: req.course_ids,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarRequest {
    pub calendar_type: String,
    pub year: i32,
    pub period: i16,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CalendarQueryParams {
    pub year: Option<i32>,
    pub period: Option<i16>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSaturdayResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
}

impl From<school_saturday::Model> for SchoolSaturdayResponse {
    fn from(model: school_saturday::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            day_of_week: model.day_of_week,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSaturdayRequest {
    pub date: NaiveDate,
    #[schema(value_type = String, example = "segunda")]
    pub day_of_week: DayOfWeek,
}

impl From<SchoolSaturdayRequest> for NewSchoolSaturday {
    fn from(req: SchoolSaturdayRequest) -> Self {
        Self {
            date: req.date,
            day_of_week: req.day_of_week,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSaturdayQuery {
    pub calendar_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HolidayResponse {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "nacional")]
    pub holiday_type: HolidayType,
}

impl From<holiday::Model> for HolidayResponse {
    fn from(model: holiday::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            date: model.date,
            holiday_type: model.holiday_type,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRequest {
    pub name: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "nacional")]
    pub holiday_type: HolidayType,
}

impl From<HolidayRequest> for NewHoliday {
    fn from(req: HolidayRequest) -> Self {
        Self {
            name: req.name,
            date: req.date,
            holiday_type: req.holiday_type,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HolidayQuery {
    pub year: Option<i32>,
}
