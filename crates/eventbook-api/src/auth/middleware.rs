// Bearer-token extraction and role gating
//
// AuthUser runs before any handler body: missing/invalid tokens never reach
// a service. Role checks are a separate, explicit step so public handlers
// simply don't ask for the extractor.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use eventbook_core::{Error, UserRole};
use std::sync::Arc;
use uuid::Uuid;

use super::config::AuthConfig;
use super::jwt::{self, Claims};
use crate::error::ApiError;

/// Shared auth state, attached to the router as an Extension layer
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<AuthConfig>,
}

impl AuthState {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// The authenticated caller, extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
}

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.claims.sub
    }

    pub fn role(&self) -> UserRole {
        self.claims.role
    }

    /// Reject with 403 unless the caller's role is in the allowed set
    pub fn require_role(&self, allowed: &[UserRole]) -> Result<(), ApiError> {
        if allowed.contains(&self.claims.role) {
            Ok(())
        } else {
            Err(Error::Authorization.into())
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                Error::Authentication("Missing or malformed Authorization header".to_string())
            })?;

        let auth = parts
            .extensions
            .get::<AuthState>()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("AuthState extension not installed"))
            .map_err(ApiError::from)?;

        let claims = jwt::decode_token(bearer.token(), &auth.config.jwt_secret)
            .map_err(|err| {
                tracing::debug!("token rejected: {err}");
                Error::Authentication("Invalid or expired token".to_string())
            })?;

        Ok(AuthUser { claims })
    }
}
