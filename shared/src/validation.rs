//! Input validation functions
//!
//! Free-function validators shared between the backend boundary checks
//! and any client that wants to pre-validate before submitting.

/// Characters allowed in a username besides ASCII alphanumerics.
const USERNAME_EXTRA_CHARS: &[char] = &['_', '.', '-'];

/// Validate username characters.
///
/// Presence is checked separately by the signup flow so that the
/// ordered "Username is required" message stays intact; an empty
/// username passes here.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Ok(());
    }
    if username.len() > 64 {
        return Err("Username too long".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || USERNAME_EXTRA_CHARS.contains(&c))
    {
        return Err(
            "Username may only contain letters, digits, '.', '_' and '-'".to_string(),
        );
    }
    Ok(())
}

/// Validate a profile link URL scheme.
pub fn validate_link_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Link URL cannot be empty".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("Link URL must start with http:// or https://".to_string());
    }
    if url.len() > 2048 {
        return Err("Link URL too long".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_accepts_common_shapes() {
        assert!(validate_username("ada").is_ok());
        assert!(validate_username("ada.lovelace").is_ok());
        assert!(validate_username("ada_lovelace-42").is_ok());
    }

    #[test]
    fn test_username_rejects_whitespace_and_symbols() {
        assert!(validate_username("ada lovelace").is_err());
        assert!(validate_username("ada@host").is_err());
        assert!(validate_username("ada/../etc").is_err());
    }

    #[test]
    fn test_username_rejects_overlong() {
        assert!(validate_username(&"a".repeat(65)).is_err());
        assert!(validate_username(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_username_allows_empty() {
        // Presence is the signup flow's concern, not a format error.
        assert!(validate_username("").is_ok());
    }

    #[test]
    fn test_link_url() {
        assert!(validate_link_url("https://github.com/ada").is_ok());
        assert!(validate_link_url("http://example.com").is_ok());
        assert!(validate_link_url("").is_err());
        assert!(validate_link_url("ftp://example.com").is_err());
        assert!(validate_link_url("javascript:alert(1)").is_err());
    }
}
