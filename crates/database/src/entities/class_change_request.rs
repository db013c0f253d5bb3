use models::{ChangeType, ValidationStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Teacher request to anticipate or make up sessions of a course class
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_change_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_class_id: Uuid,
    pub discipline_id: Option<Uuid>,
    pub change_type: ChangeType,
    pub quantity: i32,
    pub date: Date,
    pub annex: Option<String>,
    pub observation: Option<String>,
    pub validated: ValidationStatus,
    pub observation_coordinator: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::course_class::Entity",
        from = "Column::CourseClassId",
        to = "super::course_class::Column::Id",
        on_delete = "NoAction"
    )]
    CourseClass,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_delete = "NoAction"
    )]
    Discipline,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseClass.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
