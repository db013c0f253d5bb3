use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Role carried in the `accessType` token claim and on each user row
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter, AsRefStr,
)]
#[cfg_attr(
    feature = "database",
    derive(sea_orm::DeriveActiveEnum),
    sea_orm(rs_type = "String", db_type = "Text")
)]
pub enum AccessType {
    #[cfg_attr(feature = "database", sea_orm(string_value = "Admin"))]
    Admin,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Coordinator"))]
    #[serde(alias = "Coordenador")]
    #[strum(to_string = "Coordinator", serialize = "Coordenador")]
    Coordinator,
    #[cfg_attr(feature = "database", sea_orm(string_value = "Professor"))]
    Professor,
}

impl AccessType {
    /// Catalog, calendar and timetable maintenance
    pub fn can_administer(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Approving or rejecting change requests
    pub fn can_validate_requests(self) -> bool {
        matches!(self, Self::Admin | Self::Coordinator)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_access_type_claim_values() {
        let admin: AccessType = serde_json::from_str("\"Admin\"").unwrap();
        assert_eq!(admin, AccessType::Admin);

        let coord: AccessType = serde_json::from_str("\"Coordenador\"").unwrap();
        assert_eq!(coord, AccessType::Coordinator);
    }

    #[test]
    fn test_access_type_permissions() {
        assert!(AccessType::Admin.can_administer());
        assert!(!AccessType::Coordinator.can_administer());
        assert!(AccessType::Coordinator.can_validate_requests());
        assert!(!AccessType::Professor.can_validate_requests());
    }
}
