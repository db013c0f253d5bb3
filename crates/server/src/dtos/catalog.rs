use chrono::NaiveTime;
use database::{
    entities::{course, course_discipline, discipline, hour},
    services::{
        class::{ClassWithCourses, CourseLink},
        course::{CourseDiscipline, NewCourse},
        discipline::NewDiscipline,
        hour::NewHour,
    },
};
use models::CourseType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub name: String,
    pub acronym: String,
    #[schema(value_type = String, example = "integrado")]
    pub course_type: CourseType,
    pub coordinator_id: Option<Uuid>,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            acronym: model.acronym,
            course_type: model.course_type,
            coordinator_id: model.coordinator_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub name: String,
    pub acronym: String,
    #[schema(value_type = String, example = "integrado")]
    pub course_type: CourseType,
    pub coordinator_id: Option<Uuid>,
}

impl From<CourseRequest> for NewCourse {
    fn from(req: CourseRequest) -> Self {
        Self {
            name: req.name,
            acronym: req.acronym,
            course_type: req.course_type,
            coordinator_id: req.coordinator_id,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CourseQueryParams {
    #[param(value_type = Option<String>)]
    pub course_type: Option<CourseType>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DisciplineResponse {
    pub id: Uuid,
    pub name: String,
    pub acronym: String,
}

impl From<discipline::Model> for DisciplineResponse {
    fn from(model: discipline::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            acronym: model.acronym,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DisciplineRequest {
    pub name: String,
    pub acronym: String,
}

impl From<DisciplineRequest> for NewDiscipline {
    fn from(req: DisciplineRequest) -> Self {
        Self {
            name: req.name,
            acronym: req.acronym,
        }
    }
}

/// A discipline within a course, with its workload in hours
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDisciplineResponse {
    pub id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    pub workload: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline: Option<DisciplineResponse>,
}

impl From<course_discipline::Model> for CourseDisciplineResponse {
    fn from(model: course_discipline::Model) -> Self {
        Self {
            id: model.id,
            course_id: model.course_id,
            discipline_id: model.discipline_id,
            workload: model.workload,
            discipline: None,
        }
    }
}

impl From<CourseDiscipline> for CourseDisciplineResponse {
    fn from(row: CourseDiscipline) -> Self {
        Self {
            discipline: Some(row.discipline.into()),
            ..row.link.into()
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddDisciplineRequest {
    pub discipline_id: Uuid,
    pub workload: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WorkloadRequest {
    pub workload: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassCourseResponse {
    pub course_class_id: Uuid,
    pub is_active: bool,
    pub course: CourseResponse,
}

impl From<CourseLink> for ClassCourseResponse {
    fn from(link: CourseLink) -> Self {
        Self {
            course_class_id: link.course_class_id,
            is_active: link.is_active,
            course: link.course.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClassResponse {
    pub id: Uuid,
    pub semester: String,
    pub courses: Vec<ClassCourseResponse>,
}

impl From<ClassWithCourses> for ClassResponse {
    fn from(row: ClassWithCourses) -> Self {
        Self {
            id: row.class.id,
            semester: row.class.semester,
            courses: row.courses.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassRequest {
    pub semester: String,
    pub course_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateClassRequest {
    pub semester: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseClassStatusRequest {
    pub is_active: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct CourseClassesQuery {
    #[serde(default)]
    pub include_archived: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourResponse {
    pub id: Uuid,
    #[schema(value_type = String, example = "07:30:00")]
    pub hour_start: NaiveTime,
    #[schema(value_type = String, example = "08:20:00")]
    pub hour_end: NaiveTime,
}

impl From<hour::Model> for HourResponse {
    fn from(model: hour::Model) -> Self {
        Self {
            id: model.id,
            hour_start: model.hour_start,
            hour_end: model.hour_end,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourRequest {
    #[schema(value_type = String, example = "07:30:00")]
    pub hour_start: NaiveTime,
    #[schema(value_type = String, example = "08:20:00")]
    pub hour_end: NaiveTime,
}

impl From<HourRequest> for NewHour {
    fn from(req: HourRequest) -> Self {
        Self {
            hour_start: req.hour_start,
            hour_end: req.hour_end,
        }
    }
}
