use models::DayOfWeek;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Weekly timetable slot of a class within a calendar
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub class_id: Uuid,
    pub course_id: Uuid,
    pub discipline_id: Uuid,
    pub professor_id: Option<Uuid>, // cleared when the user is deleted
    pub day_of_week: DayOfWeek,
    pub hour_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::calendar::Entity",
        from = "Column::CalendarId",
        to = "super::calendar::Column::Id",
        on_delete = "Cascade"
    )]
    Calendar,
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_delete = "Cascade"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "NoAction"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_delete = "NoAction"
    )]
    Discipline,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ProfessorId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Professor,
    #[sea_orm(
        belongs_to = "super::hour::Entity",
        from = "Column::HourId",
        to = "super::hour::Column::Id",
        on_delete = "NoAction"
    )]
    Hour,
    #[sea_orm(has_many = "super::class_schedule_detail::Entity")]
    Details,
}

impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Calendar.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professor.def()
    }
}

impl Related<super::hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hour.def()
    }
}

impl Related<super::class_schedule_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
