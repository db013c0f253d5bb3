use crate::validation::ValidationError;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A class period, strictly increasing from start to end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    start: NaiveTime,
    end: NaiveTime,
}

impl HourRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ValidationError> {
        if end <= start {
            return Err(ValidationError::HourRange {
                start: start.format("%H:%M").to_string(),
                end: end.format("%H:%M").to_string(),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &HourRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_hour_range_rejects_inverted_and_empty() {
        assert!(HourRange::new(t(7, 30), t(8, 20)).is_ok());
        assert!(matches!(
            HourRange::new(t(8, 20), t(7, 30)),
            Err(ValidationError::HourRange { .. })
        ));
        assert!(HourRange::new(t(8, 0), t(8, 0)).is_err());
    }

    #[test]
    fn test_hour_range_duration_and_overlap() {
        let first = HourRange::new(t(7, 30), t(8, 20)).unwrap();
        let second = HourRange::new(t(8, 20), t(9, 10)).unwrap();
        let long = HourRange::new(t(8, 0), t(10, 0)).unwrap();

        assert_eq!(first.duration(), TimeDelta::minutes(50));
        assert!(!first.overlaps(&second));
        assert!(first.overlaps(&long));
        assert!(long.overlaps(&second));
    }
}
