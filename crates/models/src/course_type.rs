use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Modality a course is offered in
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
pub enum CourseType {
    #[cfg_attr(feature = "database", sea_orm(string_value = "integrado"))]
    Integrado,
    #[cfg_attr(feature = "database", sea_orm(string_value = "subsequente"))]
    Subsequente,
    #[cfg_attr(feature = "database", sea_orm(string_value = "concomitante"))]
    Concomitante,
    #[cfg_attr(feature = "database", sea_orm(string_value = "superior"))]
    Superior,
}

impl CourseType {
    pub fn all() -> Vec<CourseType> {
        CourseType::iter().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_course_type_parse() {
        assert_eq!(CourseType::from_str("superior").unwrap(), CourseType::Superior);
        assert!(CourseType::from_str("mestrado").is_err());
        assert_eq!(CourseType::all().len(), 4);
    }
}
