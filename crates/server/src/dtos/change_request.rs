use chrono::{NaiveDate, NaiveDateTime};
use database::{entities::class_change_request, services::change_request::NewChangeRequest};
use models::{ChangeType, ValidationStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_class_id: Uuid,
    pub discipline_id: Option<Uuid>,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "reposicao")]
    pub change_type: ChangeType,
    pub quantity: i32,
    pub date: NaiveDate,
    pub annex: Option<String>,
    pub observation: Option<String>,
    /// 0 pending, 1 approved, 2 rejected
    #[schema(value_type = i16, example = 0)]
    pub validated: ValidationStatus,
    pub observation_coordinator: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<class_change_request::Model> for ChangeRequestResponse {
    fn from(model: class_change_request::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            course_class_id: model.course_class_id,
            discipline_id: model.discipline_id,
            change_type: model.change_type,
            quantity: model.quantity,
            date: model.date,
            annex: model.annex,
            observation: model.observation,
            validated: model.validated,
            observation_coordinator: model.observation_coordinator,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangeRequestRequest {
    pub course_class_id: Uuid,
    pub discipline_id: Option<Uuid>,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "reposicao")]
    pub change_type: ChangeType,
    pub quantity: i32,
    pub date: NaiveDate,
    pub annex: Option<String>,
    pub observation: Option<String>,
}

impl From<CreateChangeRequestRequest> for NewChangeRequest {
    fn from(req: CreateChangeRequestRequest) -> Self {
        Self {
            course_class_id: req.course_class_id,
            discipline_id: req.discipline_id,
            change_type: req.change_type,
            quantity: req.quantity,
            date: req.date,
            annex: req.annex,
            observation: req.observation,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateChangeRequestRequest {
    /// 1 approves, 2 rejects
    #[schema(value_type = i16, example = 1)]
    pub validated: ValidationStatus,
    pub observation_coordinator: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRequestQuery {
    pub user_id: Option<Uuid>,
    #[param(value_type = Option<i16>)]
    pub validated: Option<ValidationStatus>,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub change_type: Option<ChangeType>,
}
