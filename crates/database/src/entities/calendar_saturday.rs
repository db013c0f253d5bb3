use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for makeup Saturdays attached to a calendar
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "calendar_saturdays")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub calendar_id: Uuid,
    pub school_saturday_id: Uuid,
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
        belongs_to = "super::school_saturday::Entity",
        from = "Column::SchoolSaturdayId",
        to = "super::school_saturday::Column::Id",
        on_delete = "Cascade"
    )]
    SchoolSaturday,
}

impl Related<super::calendar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Calendar.def()
    }
}

impl Related<super::school_saturday::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SchoolSaturday.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
