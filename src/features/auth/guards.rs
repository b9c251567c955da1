//! Role guards for report endpoints.
//!
//! Each guard reads the `Principal` placed in the request extensions by the
//! auth middleware and checks the role with the access policy.

use crate::core::error::AppError;
use crate::features::auth::model::{Principal, Role};
use crate::features::reports::policy::require_role;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard that only admits admin sessions.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(admin): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub Principal);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        require_role(&principal, Role::Admin)?;
        Ok(RequireAdmin(principal))
    }
}

/// Guard that only admits department sessions.
pub struct RequireDepartment(pub Principal);

impl<S> FromRequestParts<S> for RequireDepartment
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let principal = Principal::from_request_parts(parts, state).await?;
        require_role(&principal, Role::Department)?;
        Ok(RequireDepartment(principal))
    }
}
