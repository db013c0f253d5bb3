use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// School days a timetable slot can occupy
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text")
)]
pub enum DayOfWeek {
    #[cfg_attr(feature = "database", sea_orm(string_value = "segunda"))]
    #[serde(rename = "segunda")]
    #[strum(serialize = "segunda")]
    Monday,
    #[cfg_attr(feature = "database", sea_orm(string_value = "terca"))]
    #[serde(rename = "terca", alias = "terça")]
    #[strum(to_string = "terca", serialize = "terça")]
    Tuesday,
    #[cfg_attr(feature = "database", sea_orm(string_value = "quarta"))]
    #[serde(rename = "quarta")]
    #[strum(serialize = "quarta")]
    Wednesday,
    #[cfg_attr(feature = "database", sea_orm(string_value = "quinta"))]
    #[serde(rename = "quinta")]
    #[strum(serialize = "quinta")]
    Thursday,
    #[cfg_attr(feature = "database", sea_orm(string_value = "sexta"))]
    #[serde(rename = "sexta")]
    #[strum(serialize = "sexta")]
    Friday,
}

impl DayOfWeek {
    /// Day-to-weekday mapping used when matching calendar dates
    const WEEKDAYS: [(Self, Weekday); 5] = [
        (Self::Monday, Weekday::Mon),
        (Self::Tuesday, Weekday::Tue),
        (Self::Wednesday, Weekday::Wed),
        (Self::Thursday, Weekday::Thu),
        (Self::Friday, Weekday::Fri),
    ];

    pub fn all() -> Vec<DayOfWeek> {
        DayOfWeek::iter().collect()
    }

    /// Returns `None` for weekend days
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        Self::WEEKDAYS
            .iter()
            .find(|(_, w)| *w == weekday)
            .map(|(day, _)| *day)
    }

    pub fn weekday(self) -> Weekday {
        Self::WEEKDAYS
            .iter()
            .find(|(day, _)| *day == self)
            .map(|(_, w)| *w)
            .unwrap_or(Weekday::Mon)
    }

    pub fn of_date(date: NaiveDate) -> Option<Self> {
        Self::from_weekday(date.weekday())
    }
}

pub fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_day_of_week_from_str() {
        assert_eq!(DayOfWeek::from_str("segunda").unwrap(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from_str("terça").unwrap(), DayOfWeek::Tuesday);
        assert!(DayOfWeek::from_str("sabado").is_err());
    }

    #[test]
    fn test_day_of_week_display() {
        assert_eq!(DayOfWeek::Wednesday.to_string(), "quarta");
        assert_eq!(DayOfWeek::Friday.as_ref(), "sexta");
    }

    #[test]
    fn test_day_of_week_of_date() {
        // 2025-03-10 was a Monday
        let monday = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(DayOfWeek::of_date(monday), Some(DayOfWeek::Monday));

        let saturday = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(DayOfWeek::of_date(saturday), None);
        assert!(is_saturday(saturday));
    }

    #[test]
    fn test_day_of_week_serde() {
        let json = serde_json::to_string(&DayOfWeek::Thursday).unwrap();
        assert_eq!(json, "\"quinta\"");

        let day: DayOfWeek = serde_json::from_str("\"terça\"").unwrap();
        assert_eq!(day, DayOfWeek::Tuesday);
    }

    #[test]
    fn test_weekday_round_trip() {
        for day in DayOfWeek::all() {
            assert_eq!(DayOfWeek::from_weekday(day.weekday()), Some(day));
        }
    }
}
