use models::HourRange;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A class period in the daily grid
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hours")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hour_start: Time,
    pub hour_end: Time,
}

impl Model {
    /// `None` only for rows written around the check constraint
    pub fn range(&self) -> Option<HourRange> {
        HourRange::new(self.hour_start, self.hour_end).ok()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
