use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use database::{entities::user, services::user::UserService};
use models::AccessType;
use serde::{Deserialize, Deserializer, Serialize};

/// Claims of the bearer token this API reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: Option<String>,
    #[serde(
        rename = "accessType",
        default,
        deserialize_with = "lenient_access_type"
    )]
    pub access_type: Option<AccessType>,
}

/// An unrecognised role still authenticates, it just grants nothing
fn lenient_access_type<'de, D>(deserializer: D) -> Result<Option<AccessType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| AccessType::deserialize(value).ok()))
}

/// The authenticated caller of a request.
///
/// Extracted from the claims the resource server layer stores on the
/// request; a request without them is rejected with 401.
#[derive(Debug, Clone)]
pub struct Caller {
    pub subject: String,
    pub access_type: Option<AccessType>,
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<AccessClaims>()
            .ok_or(ApiError::Unauthorized)?;
        let subject = claims.sub.clone().ok_or(ApiError::Unauthorized)?;

        Ok(Caller {
            subject,
            access_type: claims.access_type,
        })
    }
}

impl Caller {
    pub fn require_admin(&self) -> ApiResult<()> {
        match self.access_type {
            Some(access) if access.can_administer() => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }

    pub fn require_validator(&self) -> ApiResult<()> {
        match self.access_type {
            Some(access) if access.can_validate_requests() => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.require_admin().is_ok()
    }

    /// The user row registered for the token subject
    pub async fn user(&self, state: &AppState) -> ApiResult<user::Model> {
        UserService::find_by_subject(&state.db, &self.subject)
            .await?
            .ok_or(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn caller(access_type: Option<AccessType>) -> Caller {
        Caller {
            subject: "abc".to_string(),
            access_type,
        }
    }

    #[test]
    fn test_claims_read_access_type() {
        let claims: AccessClaims =
            serde_json::from_str(r#"{"sub":"abc","accessType":"Coordenador","iss":"x"}"#).unwrap();
        assert_eq!(claims.access_type, Some(AccessType::Coordinator));

        let claims: AccessClaims = serde_json::from_str(r#"{"sub":"abc"}"#).unwrap();
        assert_eq!(claims.access_type, None);
    }

    #[test]
    fn test_unknown_access_type_grants_nothing() {
        let claims: AccessClaims =
            serde_json::from_str(r#"{"sub":"abc","accessType":"Diretor"}"#).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("abc"));
        assert_eq!(claims.access_type, None);

        let claims: AccessClaims =
            serde_json::from_str(r#"{"sub":"abc","accessType":7}"#).unwrap();
        let caller = caller(claims.access_type);
        assert!(matches!(caller.require_admin(), Err(ApiError::Forbidden)));
        assert!(matches!(caller.require_validator(), Err(ApiError::Forbidden)));
    }

    #[test]
    fn test_role_gates() {
        assert!(caller(Some(AccessType::Admin)).require_admin().is_ok());
        assert!(caller(Some(AccessType::Admin)).require_validator().is_ok());

        assert!(caller(Some(AccessType::Coordinator)).require_admin().is_err());
        assert!(caller(Some(AccessType::Coordinator)).require_validator().is_ok());

        assert!(caller(Some(AccessType::Professor)).require_validator().is_err());
        assert!(caller(None).require_admin().is_err());
    }
}
