use chrono::{NaiveDate, NaiveDateTime};
use database::{
    entities::attendance,
    services::attendance::{AttendanceFilter, NewAttendance, UpdateAttendance},
};
use models::AttendanceStatus;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub id: Uuid,
    pub class_schedule_detail_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "presenca")]
    pub status: AttendanceStatus,
    pub registered_by: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub justification: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<attendance::Model> for AttendanceResponse {
    fn from(model: attendance::Model) -> Self {
        Self {
            id: model.id,
            class_schedule_detail_id: model.class_schedule_detail_id,
            date: model.date,
            status: model.status,
            registered_by: model.registered_by,
            latitude: model.latitude,
            longitude: model.longitude,
            justification: model.justification,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequest {
    pub class_schedule_detail_id: Uuid,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "presenca")]
    pub status: AttendanceStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub justification: Option<String>,
}

impl From<CreateAttendanceRequest> for NewAttendance {
    fn from(req: CreateAttendanceRequest) -> Self {
        Self {
            class_schedule_detail_id: req.class_schedule_detail_id,
            date: req.date,
            status: req.status,
            latitude: req.latitude,
            longitude: req.longitude,
            justification: req.justification,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAttendanceRequest {
    #[schema(value_type = String, example = "abonada")]
    pub status: AttendanceStatus,
    pub justification: Option<String>,
}

impl From<UpdateAttendanceRequest> for UpdateAttendance {
    fn from(req: UpdateAttendanceRequest) -> Self {
        Self {
            status: req.status,
            justification: req.justification,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub class_schedule_detail_id: Option<Uuid>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[param(value_type = Option<String>)]
    pub status: Option<AttendanceStatus>,
}

impl From<AttendanceQuery> for AttendanceFilter {
    fn from(query: AttendanceQuery) -> Self {
        Self {
            class_schedule_detail_id: query.class_schedule_detail_id,
            from: query.from,
            to: query.to,
            status: query.status,
        }
    }
}
