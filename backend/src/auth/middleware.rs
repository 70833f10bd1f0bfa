//! Authentication extractor
//!
//! Validates the Bearer access token on protected routes and exposes
//! the caller's identity to handlers. Uses the pre-computed JWT keys
//! from AppState.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Authenticated caller extracted from a Bearer access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Profile ID (ULID string, the token subject)
    pub id: String,
    /// Username claim from the access token
    pub username: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        let claims = app_state
            .jwt()
            .validate_access_token(token)
            .map_err(|e| ApiError::Unauthorized(format!("Invalid token: {}", e)))?;

        let username = claims
            .username
            .ok_or_else(|| ApiError::Unauthorized("Missing username claim".to_string()))?;

        Ok(AuthUser {
            id: claims.sub,
            username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_debug() {
        let user = AuthUser {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            username: "ada".to_string(),
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("AuthUser"));
    }
}
