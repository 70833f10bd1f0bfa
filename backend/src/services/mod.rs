//! Business logic services
//!
//! Services encapsulate business logic and coordinate between the
//! repository, the password hasher and the token service.

use crate::error::ApiError;
use devfolio_shared::types::ProfileLink;

pub mod auth;
pub mod dev;

pub use auth::AuthService;
pub use dev::DevService;

/// First human-readable message out of a validator error set
pub(crate) fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

/// Serialize technology tags to their storage text
pub(crate) fn encode_stacks(stacks: &[String]) -> Result<String, ApiError> {
    serde_json::to_string(stacks).map_err(|e| ApiError::Internal(e.into()))
}

/// Serialize profile links to their storage text
pub(crate) fn encode_links(links: &[ProfileLink]) -> Result<String, ApiError> {
    serde_json::to_string(links).map_err(|e| ApiError::Internal(e.into()))
}
