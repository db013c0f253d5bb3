use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Earliest academic year a calendar may describe
pub const MIN_CALENDAR_YEAR: i32 = 2020;

/// Calendar types with a known meaning; anything else must be descriptive
const KNOWN_TYPES: [&str; 3] = ["anual", "semestral", "modular"];
const MIN_CUSTOM_TYPE_LEN: usize = 3;
const MAX_TYPE_LEN: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarType(String);

impl CalendarType {
    /// Accepts one of the known types (normalised to lowercase) or any
    /// custom label of at least three characters
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();

        if KNOWN_TYPES.contains(&lowered.as_str()) {
            return Ok(Self(lowered));
        }

        let len = trimmed.chars().count();
        if len < MIN_CUSTOM_TYPE_LEN {
            return Err(ValidationError::invalid("type", raw));
        }
        if len > MAX_TYPE_LEN {
            return Err(ValidationError::TooLong {
                field: "type",
                max: MAX_TYPE_LEN,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CalendarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Validated (year, period) pair of a calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarPeriod {
    pub year: i32,
    pub period: i16,
}

impl CalendarPeriod {
    pub fn new(year: i32, period: i16) -> Result<Self, ValidationError> {
        if year < MIN_CALENDAR_YEAR {
            return Err(ValidationError::Rule(format!(
                "year must be {MIN_CALENDAR_YEAR} or later, got {year}"
            )));
        }
        if !matches!(period, 1 | 2) {
            return Err(ValidationError::invalid("period", period));
        }

        Ok(Self { year, period })
    }
}

impl Display for CalendarPeriod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.year, self.period)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_calendar_type_known_values_are_normalised() {
        assert_eq!(CalendarType::parse(" Semestral ").unwrap().as_str(), "semestral");
    }

    #[test]
    fn test_calendar_type_custom_needs_min_length() {
        assert_eq!(
            CalendarType::parse("Regular noturno").unwrap().as_str(),
            "Regular noturno"
        );
        assert!(CalendarType::parse("ab").is_err());
        assert!(CalendarType::parse("   ").is_err());
        assert!(CalendarType::parse(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_calendar_period_bounds() {
        assert!(CalendarPeriod::new(2020, 1).is_ok());
        assert!(CalendarPeriod::new(2019, 1).is_err());
        assert!(CalendarPeriod::new(2024, 0).is_err());
        assert!(CalendarPeriod::new(2024, 3).is_err());
        assert_eq!(CalendarPeriod::new(2025, 2).unwrap().to_string(), "2025.2");
    }
}
