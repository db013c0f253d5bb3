use models::CourseType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub acronym: String, // e.g. "ADM"
    pub course_type: CourseType,
    pub coordinator_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CoordinatorId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Coordinator,
    #[sea_orm(has_many = "super::course_class::Entity")]
    CourseClasses,
    #[sea_orm(has_many = "super::course_discipline::Entity")]
    CourseDisciplines,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coordinator.def()
    }
}

impl Related<super::course_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseClasses.def()
    }
}

impl Related<super::course_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDisciplines.def()
    }
}

// Many-to-many relationship with disciplines
impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_discipline::Relation::Discipline.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_discipline::Relation::Course.def().rev())
    }
}

// Many-to-many relationship with classes
impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_class::Relation::Class.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_class::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
