//! Profile directory service: list, get, search, update, delete

use crate::auth::{password, AuthUser};
use crate::error::ApiError;
use crate::repositories::{DevChanges, DevRepository, ProfileRow, SummaryRow};
use crate::services::{encode_links, encode_stacks, first_validation_message};
use devfolio_shared::types::{DevProfile, DevSummary, MessageResponse, UpdateDevRequest};
use devfolio_shared::validation::{validate_link_url, validate_username};
use sqlx::PgPool;
use tracing::info;
use validator::Validate;

/// Profile directory service
pub struct DevService;

impl DevService {
    /// List all profiles, minimal projection
    pub async fn list(pool: &PgPool) -> Result<Vec<DevSummary>, ApiError> {
        let rows = DevRepository::list(pool).await?;
        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    /// Fetch one full profile by id
    pub async fn get(pool: &PgPool, id: &str) -> Result<DevProfile, ApiError> {
        let row = DevRepository::find_profile_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Developer not found".to_string()))?;

        Ok(profile_from_row(row))
    }

    /// Case-insensitive substring search over the name columns
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<DevSummary>, ApiError> {
        let rows = DevRepository::search(pool, term).await?;
        Ok(rows.into_iter().map(summary_from_row).collect())
    }

    /// Apply a partial update to the caller's own profile
    ///
    /// The authenticated identity must match the target id; anything
    /// else is a permission error. Updating an id that no longer exists
    /// affects zero rows and still reports success.
    pub async fn update(
        pool: &PgPool,
        auth: &AuthUser,
        req: UpdateDevRequest,
    ) -> Result<MessageResponse, ApiError> {
        if auth.id != req.id {
            return Err(ApiError::Forbidden(
                "You can only update your own profile".to_string(),
            ));
        }
        if req.is_empty() {
            return Err(ApiError::Validation("Fields are required".to_string()));
        }
        req.validate()
            .map_err(|e| ApiError::Validation(first_validation_message(&e)))?;
        if let Some(username) = &req.username {
            validate_username(username).map_err(ApiError::Validation)?;
        }
        if let Some(links) = &req.links {
            for link in links {
                validate_link_url(&link.url).map_err(ApiError::Validation)?;
            }
        }

        let password_hash = match req.password {
            Some(new_password) => Some(
                password::hash_async(new_password)
                    .await
                    .map_err(ApiError::Internal)?,
            ),
            None => None,
        };

        let changes = DevChanges {
            username: req.username,
            firstname: req.firstname,
            middlename: req.middlename,
            lastname: req.lastname,
            bio: req.bio,
            stacks: req.stacks.as_deref().map(encode_stacks).transpose()?,
            links: req.links.as_deref().map(encode_links).transpose()?,
            password_hash,
        };

        DevRepository::update(pool, &req.id, changes).await?;

        Ok(MessageResponse {
            message: "Updated successfully".to_string(),
        })
    }

    /// Delete the caller's own profile
    ///
    /// No existence check: deleting an id that is already gone affects
    /// zero rows and still reports success.
    pub async fn delete(
        pool: &PgPool,
        auth: &AuthUser,
        id: &str,
    ) -> Result<MessageResponse, ApiError> {
        if auth.id != id {
            return Err(ApiError::Forbidden(
                "You can only delete your own profile".to_string(),
            ));
        }

        let rows = DevRepository::delete(pool, id).await?;
        info!(%id, rows, "profile deleted");

        Ok(MessageResponse {
            message: "Deleted successfully".to_string(),
        })
    }
}

fn summary_from_row(row: SummaryRow) -> DevSummary {
    DevSummary {
        id: row.id,
        firstname: row.firstname,
        middlename: row.middlename,
        lastname: row.lastname,
    }
}

fn profile_from_row(row: ProfileRow) -> DevProfile {
    DevProfile {
        id: row.id,
        username: row.username,
        firstname: row.firstname,
        middlename: row.middlename,
        lastname: row.lastname,
        bio: row.bio,
        // Tolerate blobs written before the typed contract existed
        stacks: row
            .stacks
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
        links: row
            .links
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_row_parses_storage_blobs() {
        let row = ProfileRow {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            username: "ada".to_string(),
            firstname: "Ada".to_string(),
            middlename: None,
            lastname: Some("Lovelace".to_string()),
            bio: Some("first programmer".to_string()),
            stacks: Some(r#"["rust","postgres"]"#.to_string()),
            links: Some(r#"[{"label":"github","url":"https://github.com/ada"}]"#.to_string()),
        };

        let profile = profile_from_row(row);
        assert_eq!(profile.stacks, vec!["rust", "postgres"]);
        assert_eq!(profile.links.len(), 1);
        assert_eq!(profile.links[0].label, "github");
    }

    #[test]
    fn test_profile_from_row_tolerates_missing_and_corrupt_blobs() {
        let row = ProfileRow {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            username: "ada".to_string(),
            firstname: "Ada".to_string(),
            middlename: None,
            lastname: None,
            bio: None,
            stacks: None,
            links: Some("not json".to_string()),
        };

        let profile = profile_from_row(row);
        assert!(profile.stacks.is_empty());
        assert!(profile.links.is_empty());
    }
}
