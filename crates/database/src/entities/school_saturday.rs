use models::DayOfWeek;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A Saturday with classes; it follows the timetable of `day_of_week`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "school_saturdays")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub day_of_week: DayOfWeek,
    #[sea_orm(unique)]
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::calendar_saturday::Entity")]
    CalendarSaturdays,
}

impl Related<super::calendar_saturday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CalendarSaturdays.def()
    }
}

// Many-to-many relationship with calendars
impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        super::calendar_saturday::Relation::Calendar.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::calendar_saturday::Relation::SchoolSaturday.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
