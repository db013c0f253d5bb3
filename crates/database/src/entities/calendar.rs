use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Academic term scoping which classes, courses and Saturdays are active
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calendars")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub calendar_type: String,
    pub year: i32,
    pub period: i16, // 1 or 2
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::calendar_class::Entity")]
    CalendarClasses,
    #[sea_orm(has_many = "super::calendar_course::Entity")]
    CalendarCourses,
    #[sea_orm(has_many = "super::calendar_saturday::Entity")]
    CalendarSaturdays,
    #[sea_orm(has_many = "super::class_schedule::Entity")]
    ClassSchedules,
}

impl Related<super::calendar_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarClasses.def()
    }
}

impl Related<super::calendar_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarCourses.def()
    }
}

impl Related<super::calendar_saturday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarSaturdays.def()
    }
}

impl Related<super::class_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSchedules.def()
    }
}

// Many-to-many relationship with classes
impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar_class::Relation::Class.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::calendar_class::Relation::Calendar.def().rev())
    }
}

// Many-to-many relationship with courses
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::calendar_course::Relation::Calendar.def().rev())
    }
}

// Many-to-many relationship with makeup Saturdays
impl Related<super::school_saturday::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar_saturday::Relation::SchoolSaturday.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::calendar_saturday::Relation::Calendar.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
