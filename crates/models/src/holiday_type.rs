use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text")
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HolidayType {
    #[cfg_attr(feature = "database", sea_orm(string_value = "nacional"))]
    Nacional,
    #[cfg_attr(feature = "database", sea_orm(string_value = "estadual"))]
    Estadual,
    #[cfg_attr(feature = "database", sea_orm(string_value = "municipal"))]
    Municipal,
    /// Recess days set by the school itself
    #[cfg_attr(feature = "database", sea_orm(string_value = "institucional"))]
    Institucional,
}
