use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Outcome recorded for one timetable slot on one date
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text")
)]
pub enum AttendanceStatus {
    #[cfg_attr(feature = "database", sea_orm(string_value = "presenca"))]
    #[serde(rename = "presenca", alias = "presença")]
    #[strum(to_string = "presenca", serialize = "presença")]
    Present,
    #[cfg_attr(feature = "database", sea_orm(string_value = "falta"))]
    #[serde(rename = "falta")]
    #[strum(serialize = "falta")]
    Absent,
    /// Absence excused by the coordination; needs a justification
    #[cfg_attr(feature = "database", sea_orm(string_value = "abonada"))]
    #[serde(rename = "abonada")]
    #[strum(serialize = "abonada")]
    Excused,
}

impl AttendanceStatus {
    pub fn requires_justification(self) -> bool {
        matches!(self, Self::Excused)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_accepts_accented_alias() {
        let status: AttendanceStatus = serde_json::from_str("\"presença\"").unwrap();
        assert_eq!(status, AttendanceStatus::Present);
        assert_eq!(
            AttendanceStatus::from_str("presença").unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(AttendanceStatus::Present.to_string(), "presenca");
    }

    #[test]
    fn test_only_excused_requires_justification() {
        assert!(AttendanceStatus::Excused.requires_justification());
        assert!(!AttendanceStatus::Absent.requires_justification());
        assert!(!AttendanceStatus::Present.requires_justification());
    }
}
