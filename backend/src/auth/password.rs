//! Password hashing using argon2
//!
//! Argon2id with per-hash random salts. Hashing is CPU-intensive, so
//! the async variants run on the blocking thread pool to keep the
//! runtime responsive.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password (blocking)
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(digest.to_string())
}

/// Verify a password against a stored hash (blocking)
pub fn verify(password: &str, hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hash a password on the blocking thread pool
pub async fn hash_async(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
}

/// Verify a password on the blocking thread pool
pub async fn verify_async(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify(&password, &hash))
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash("longpassword").unwrap();

        assert!(verify("longpassword", &digest).unwrap());
        assert!(!verify("wrongpassword", &digest).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let first = hash("longpassword").unwrap();
        let second = hash("longpassword").unwrap();

        // Random salts make every digest unique
        assert_ne!(first, second);
        assert!(verify("longpassword", &first).unwrap());
        assert!(verify("longpassword", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify("longpassword", "not-a-phc-string").is_err());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let digest = hash_async("longpassword".to_string()).await.unwrap();

        assert!(verify_async("longpassword".to_string(), digest.clone())
            .await
            .unwrap());
        assert!(!verify_async("wrong".to_string(), digest).await.unwrap());
    }
}
