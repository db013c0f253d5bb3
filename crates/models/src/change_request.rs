use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Kind of session change a teacher asks for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text")
)]
pub enum ChangeType {
    /// Teaching a session ahead of its scheduled date (anteposição)
    #[cfg_attr(feature = "database", sea_orm(string_value = "anteposicao"))]
    #[serde(rename = "anteposicao", alias = "anteposição")]
    #[strum(to_string = "anteposicao", serialize = "anteposição")]
    Anticipation,
    /// Making up a missed session (reposição)
    #[cfg_attr(feature = "database", sea_orm(string_value = "reposicao"))]
    #[serde(rename = "reposicao", alias = "reposição")]
    #[strum(to_string = "reposicao", serialize = "reposição")]
    MakeUp,
}

/// Coordinator decision on a change request, stored as `0`, `1` or `2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "i16", db_type = "SmallInteger")
)]
#[serde(try_from = "i16", into = "i16")]
pub enum ValidationStatus {
    #[cfg_attr(feature = "database", sea_orm(num_value = 0))]
    Pending,
    #[cfg_attr(feature = "database", sea_orm(num_value = 1))]
    Approved,
    #[cfg_attr(feature = "database", sea_orm(num_value = 2))]
    Rejected,
}

impl ValidationStatus {
    /// A request leaves `Pending` exactly once and never comes back
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }

    pub fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl TryFrom<i16> for ValidationStatus {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(ValidationError::invalid("validated", other)),
        }
    }
}

impl From<ValidationStatus> for i16 {
    fn from(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::Pending => 0,
            ValidationStatus::Approved => 1,
            ValidationStatus::Rejected => 2,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validation_status_values() {
        for raw in 0..=2 {
            let status = ValidationStatus::try_from(raw).unwrap();
            assert_eq!(i16::from(status), raw);
        }
        assert!(ValidationStatus::try_from(3).is_err());
        assert!(ValidationStatus::try_from(-1).is_err());
    }

    #[test]
    fn test_validation_status_transitions() {
        use ValidationStatus::*;

        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
        assert!(!Approved.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Approved));
        assert!(!Approved.can_transition_to(Pending));
    }

    #[test]
    fn test_validation_status_serde_as_number() {
        assert_eq!(
            serde_json::to_string(&ValidationStatus::Rejected).unwrap(),
            "2"
        );
        assert!(serde_json::from_str::<ValidationStatus>("5").is_err());
    }

    #[test]
    fn test_change_type_aliases() {
        let t: ChangeType = serde_json::from_str("\"reposição\"").unwrap();
        assert_eq!(t, ChangeType::MakeUp);
        assert_eq!(ChangeType::Anticipation.to_string(), "anteposicao");
    }
}
