use chrono::NaiveDateTime;
use database::{
    entities::user,
    services::user::{NewUser, UpdateUser},
};
use models::AccessType;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub subject: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "Professor")]
    pub access_type: AccessType,
    pub created_at: NaiveDateTime,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            subject: model.subject,
            name: model.name,
            email: model.email,
            access_type: model.access_type,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub subject: String,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "Professor")]
    pub access_type: AccessType,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            subject: req.subject,
            name: req.name,
            email: req.email,
            access_type: req.access_type,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "Coordinator")]
    pub access_type: AccessType,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            access_type: req.access_type,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserQueryParams {
    #[param(value_type = Option<String>)]
    pub access_type: Option<AccessType>,
}
