//! Authenticated caller extractor.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// The caller identified by a verified access token.
///
/// Handlers receive it explicitly; nothing reads identity from ambient state.
#[derive(Debug, Clone)]
pub struct UserAuth {
    /// Subject claim of the token.
    pub user_id: Uuid,
    /// JWT ID, logged for correlation with the identity provider.
    pub jti: String,
}

impl UserAuth {
    /// Verifies the `Authorization: Bearer` header against the configured key.
    pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<Self, ApiError> {
        let token = bearer_token(headers).ok_or_else(|| {
            ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
        })?;

        let verifier = state.jwt.as_ref().ok_or_else(|| {
            ApiError::ServiceUnavailable("Authentication service unavailable".to_string())
        })?;

        let (user_id, claims) = verifier.verify_access_token(token).map_err(|e| {
            tracing::debug!(error = %e, "JWT validation failed");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })?;

        Ok(Self {
            user_id,
            jti: claims.jti,
        })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for UserAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by require_user_auth on protected routes.
        if let Some(auth) = parts.extensions.get::<UserAuth>() {
            return Ok(auth.clone());
        }

        UserAuth::authenticate(state, &parts.headers)
    }
}
