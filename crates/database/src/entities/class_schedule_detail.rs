use models::DayOfWeek;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Concrete assignment of a discipline and teacher to a schedule slot
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "class_schedule_details")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_schedule_id: Uuid,
    pub discipline_id: Uuid,
    pub user_id: Option<Uuid>,
    pub hour_id: Uuid,
    pub day_of_week: DayOfWeek,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_schedule::Entity",
        from = "Column::ClassScheduleId",
        to = "super::class_schedule::Column::Id",
        on_delete = "Cascade"
    )]
    ClassSchedule,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_delete = "NoAction"
    )]
    Discipline,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::hour::Entity",
        from = "Column::HourId",
        to = "super::hour::Column::Id",
        on_delete = "NoAction"
    )]
    Hour,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendances,
}

impl Related<super::class_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassSchedule.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::hour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hour.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
