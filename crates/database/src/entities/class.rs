use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A cohort of students; archival lives on the course link, not here
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub semester: String, // e.g. "S1"
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_class::Entity")]
    CourseClasses,
    #[sea_orm(has_many = "super::calendar_class::Entity")]
    CalendarClasses,
}

impl Related<super::course_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseClasses.def()
    }
}

impl Related<super::calendar_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarClasses.def()
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_class::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_class::Relation::Class.def().rev())
    }
}

// Many-to-many relationship with calendars
impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar_class::Relation::Calendar.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::calendar_class::Relation::Class.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
