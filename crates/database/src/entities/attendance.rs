use models::AttendanceStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Presence record of one schedule slot on one date.
///
/// `(class_schedule_detail_id, date)` is unique.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub class_schedule_detail_id: Uuid,
    pub date: Date,
    pub status: AttendanceStatus,
    pub registered_by: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub justification: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_schedule_detail::Entity",
        from = "Column::ClassScheduleDetailId",
        to = "super::class_schedule_detail::Column::Id",
        on_delete = "Cascade"
    )]
    ClassScheduleDetail,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RegisteredBy",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    RegisteredBy,
}

impl Related<super::class_schedule_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassScheduleDetail.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegisteredBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
