use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "disciplines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub acronym: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_discipline::Entity")]
    CourseDisciplines,
}

impl Related<super::course_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseDisciplines.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_discipline::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_discipline::Relation::Discipline.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
