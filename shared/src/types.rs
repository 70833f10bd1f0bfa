//! API request and response types
//!
//! The wire format is camelCase where the existing client expects it
//! (signin response); everything else stays snake_case.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One external profile link (repository, portfolio site, social profile).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

/// Signup request
///
/// Required fields default to empty strings so that a missing field
/// reaches the handler's ordered validation instead of failing JSON
/// extraction with a generic deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(max = 64, message = "Username too long"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Firstname too long"))]
    pub firstname: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "Password too long"))]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProfileLink>>,
}

/// Signin request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Free-text profile search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search: String,
}

/// Token verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: String,
}

/// Partial profile update request
///
/// `id` selects the record; every other field is optional and applied
/// only when present (last-writer-wins).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDevRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 64, message = "Username too long"))]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 128, message = "Firstname too long"))]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProfileLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 128, message = "Password too long"))]
    pub password: Option<String>,
}

impl UpdateDevRequest {
    /// True when no mutable field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.firstname.is_none()
            && self.middlename.is_none()
            && self.lastname.is_none()
            && self.bio.is_none()
            && self.stacks.is_none()
            && self.links.is_none()
            && self.password.is_none()
    }
}

/// Minimal projection returned by list and search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevSummary {
    pub id: String,
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

/// Full profile projection returned by get-by-id (never the password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevProfile {
    pub id: String,
    pub username: String,
    pub firstname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middlename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub stacks: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// Identity payload nested in auth responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevIdentity {
    pub id: String,
}

/// Signup response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    pub data: DevIdentity,
}

/// Signin response
///
/// The existing client reads `accessToken` from the body, so this type
/// keeps the camelCase wire form. The refresh token also travels in the
/// body; moving it to an http-only cookie is future work.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub data: DevIdentity,
}

/// Generic message response (update, delete, verify)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
