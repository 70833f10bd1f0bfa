//! JWT token generation and validation
//!
//! Issues short-lived access tokens (subject id + username) and
//! longer-lived refresh tokens (subject id only). Keys are pre-computed
//! once at startup and shared through AppState.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (profile ID, a ULID string)
    pub sub: String,
    /// Username, present on access tokens only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid key derivation on every request.
/// Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_token_expiry_secs: i64,
    refresh_token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, access_token_expiry_secs: i64, refresh_token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            access_token_expiry_secs,
            refresh_token_expiry_secs,
        }
    }

    /// Generate an access token carrying the profile id and username
    pub fn generate_access_token(&self, id: &str, username: &str) -> Result<String> {
        self.generate_token(id, Some(username), "access", self.access_token_expiry_secs)
    }

    /// Generate a refresh token carrying only the profile id
    pub fn generate_refresh_token(&self, id: &str) -> Result<String> {
        self.generate_token(id, None, "refresh", self.refresh_token_expiry_secs)
    }

    fn generate_token(
        &self,
        id: &str,
        username: Option<&str>,
        token_type: &str,
        expiry_secs: i64,
    ) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(expiry_secs);

        let claims = Claims {
            sub: id.to_string(),
            username: username.map(str::to_string),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: token_type.to_string(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to generate {} token: {}", token_type, e))
    }

    /// Validate a token of either type and return its claims
    ///
    /// This is a plain synchronous success/failure call; callers branch
    /// on the Result directly.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Validate an access token specifically
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        let claims = self.validate_token(token)?;
        if claims.token_type != "access" {
            return Err(anyhow::anyhow!("Not an access token"));
        }
        Ok(claims)
    }

    /// Validate a refresh token specifically
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims> {
        let claims = self.validate_token(token)?;
        if claims.token_type != "refresh" {
            return Err(anyhow::anyhow!("Not a refresh token"));
        }
        Ok(claims)
    }

    /// Access token expiry in seconds
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.access_token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 900, 86400)
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let service = create_test_service();
        let id = Ulid::new().to_string();

        let token = service.generate_access_token(&id, "ada").unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.username.as_deref(), Some("ada"));
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_refresh_token_carries_id_only() {
        let service = create_test_service();
        let id = Ulid::new().to_string();

        let token = service.generate_refresh_token(&id).unwrap();
        let claims = service.validate_refresh_token(&token).unwrap();

        assert_eq!(claims.sub, id);
        assert!(claims.username.is_none());
        assert_eq!(claims.token_type, "refresh");
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let service = create_test_service();
        let token = service
            .generate_access_token(&Ulid::new().to_string(), "ada")
            .unwrap();

        assert!(service.validate_refresh_token(&token).is_err());
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let service = create_test_service();
        let token = service
            .generate_refresh_token(&Ulid::new().to_string())
            .unwrap();

        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert!(service.validate_token("invalid.token.here").is_err());
        assert!(service.validate_token("").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("other-secret", 900, 86400);

        let token = other
            .generate_access_token(&Ulid::new().to_string(), "ada")
            .unwrap();

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Expiry far enough in the past to clear the default leeway
        let service = JwtService::new("test-secret", -300, 86400);
        let token = service
            .generate_access_token(&Ulid::new().to_string(), "ada")
            .unwrap();

        assert!(create_test_service().validate_token(&token).is_err());
    }
}
