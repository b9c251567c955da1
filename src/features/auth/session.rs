//! Session token issuance and verification.
//!
//! Sessions are HS256 JWTs signed with the process-wide secret. Verification
//! is stateless, so a single `SessionManager` is shared across all requests.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::config::SessionConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{Principal, Role};

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionClaims {
    id: i64,
    email: String,
    #[serde(rename = "type")]
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    department: Option<String>,
    iat: i64,
    exp: i64,
}

impl TryFrom<SessionClaims> for Principal {
    type Error = AppError;

    fn try_from(claims: SessionClaims) -> Result<Self> {
        match claims.role {
            Role::Admin => Ok(Principal::Admin {
                id: claims.id,
                email: claims.email,
            }),
            Role::Department => {
                let name = claims
                    .department
                    .filter(|d| !d.is_empty())
                    .ok_or(AppError::InvalidToken)?;
                Ok(Principal::Department {
                    id: claims.id,
                    name,
                    email: claims.email,
                })
            }
        }
    }
}

pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    leeway_secs: u64,
}

impl SessionManager {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: i64::try_from(config.ttl_secs).unwrap_or(i64::MAX),
            leeway_secs: config.leeway_secs,
        }
    }

    /// Issue a session for `principal`, valid from now.
    pub fn issue(&self, principal: &Principal) -> Result<String> {
        self.issue_at(principal, Utc::now().timestamp())
    }

    fn issue_at(&self, principal: &Principal, issued_at: i64) -> Result<String> {
        let claims = SessionClaims {
            id: principal.id(),
            email: principal.email().to_string(),
            role: principal.role(),
            department: principal.department_name().map(str::to_string),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    /// Validate signature and expiry, then decode the principal.
    ///
    /// Every failure collapses into `AppError::InvalidToken`; the reason is
    /// only logged at debug level.
    pub fn verify(&self, token: &str) -> Result<Principal> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Session token rejected: {}", e);
                AppError::InvalidToken
            })?;

        Principal::try_from(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{admin_principal, department_principal};

    fn manager_with_secret(secret: &str) -> SessionManager {
        SessionManager::new(&SessionConfig {
            secret: secret.to_string(),
            ttl_secs: 24 * 60 * 60,
            leeway_secs: 0,
        })
    }

    fn manager() -> SessionManager {
        manager_with_secret("test-secret")
    }

    #[test]
    fn test_round_trip_department() {
        let sessions = manager();
        let principal = department_principal("Roads");

        let token = sessions.issue(&principal).unwrap();
        assert_eq!(sessions.verify(&token).unwrap(), principal);
    }

    #[test]
    fn test_round_trip_admin() {
        let sessions = manager();
        let principal = admin_principal();

        let token = sessions.issue(&principal).unwrap();
        assert_eq!(sessions.verify(&token).unwrap(), principal);
    }

    #[test]
    fn test_expired_session_is_rejected() {
        let sessions = manager();
        let issued_at = Utc::now().timestamp() - 25 * 60 * 60;

        let token = sessions.issue_at(&admin_principal(), issued_at).unwrap();
        assert!(matches!(sessions.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_session_within_window_is_accepted() {
        let sessions = manager();
        let issued_at = Utc::now().timestamp() - 23 * 60 * 60;

        let token = sessions.issue_at(&admin_principal(), issued_at).unwrap();
        assert!(sessions.verify(&token).is_ok());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = manager_with_secret("other-secret")
            .issue(&admin_principal())
            .unwrap();
        assert!(matches!(manager().verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let sessions = manager();
        let token = sessions.issue(&department_principal("Roads")).unwrap();

        // Swap the payload for one claiming admin, keep the original signature
        let parts: Vec<&str> = token.split('.').collect();
        let admin_token = sessions.issue(&admin_principal()).unwrap();
        let admin_payload = admin_token.split('.').nth(1).unwrap();
        let forged = format!("{}.{}.{}", parts[0], admin_payload, parts[2]);

        assert!(matches!(sessions.verify(&forged), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let sessions = manager();
        for token in ["", "not-a-token", "a.b.c"] {
            assert!(matches!(sessions.verify(token), Err(AppError::InvalidToken)));
        }
    }

    #[test]
    fn test_department_claim_without_name_is_rejected() {
        let sessions = manager();
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            id: 3,
            email: "roads@gccdemo.in".to_string(),
            role: Role::Department,
            department: None,
            iat: now,
            exp: now + 60,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(sessions.verify(&token), Err(AppError::InvalidToken)));
    }
}
