//! Authentication service: signup, signin and token verification
//!
//! Signup preserves the ordered, short-circuit validation messages the
//! client already relies on; the typed request contract and the
//! database UNIQUE constraint sit underneath them.

use crate::auth::{password, JwtService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, DevRepository, NewDev};
use crate::services::{encode_links, encode_stacks, first_validation_message};
use devfolio_shared::types::{
    DevIdentity, LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
    VerifyTokenRequest,
};
use devfolio_shared::validation::{validate_link_url, validate_username};
use sqlx::PgPool;
use tracing::info;
use ulid::Ulid;
use validator::Validate;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Create a new profile
    ///
    /// Validation short-circuits in a fixed order; the first failure
    /// wins. The username existence check runs before the remaining
    /// field checks, matching the established client contract.
    pub async fn signup(pool: &PgPool, req: SignupRequest) -> Result<SignupResponse, ApiError> {
        let username = req.username.trim();
        let firstname = req.firstname.trim();

        if username.is_empty()
            && firstname.is_empty()
            && req.password.is_empty()
            && req.confirm_password.is_empty()
        {
            return Err(ApiError::Validation("Fields are required".to_string()));
        }
        if username.is_empty() {
            return Err(ApiError::Validation("Username is required".to_string()));
        }
        if DevRepository::username_exists(pool, username).await? {
            return Err(ApiError::Conflict("Username is already taken".to_string()));
        }
        if firstname.is_empty() {
            return Err(ApiError::Validation("Firstname is required".to_string()));
        }
        if req.password.is_empty() {
            return Err(ApiError::Validation("Password is required".to_string()));
        }
        if req.password != req.confirm_password {
            return Err(ApiError::Validation("Password does not match".to_string()));
        }
        req.validate()
            .map_err(|e| ApiError::Validation(first_validation_message(&e)))?;
        validate_username(username).map_err(ApiError::Validation)?;
        if let Some(links) = &req.links {
            for link in links {
                validate_link_url(&link.url).map_err(ApiError::Validation)?;
            }
        }

        let id = Ulid::new().to_string();
        let password_hash = password::hash_async(req.password.clone())
            .await
            .map_err(ApiError::Internal)?;

        let stacks = req.stacks.as_deref().map(encode_stacks).transpose()?;
        let links = req.links.as_deref().map(encode_links).transpose()?;

        let new_dev = NewDev {
            id: id.clone(),
            username: username.to_string(),
            firstname: firstname.to_string(),
            middlename: req.middlename,
            lastname: req.lastname,
            password_hash,
            bio: req.bio,
            stacks,
            links,
        };

        match DevRepository::create(pool, new_dev).await {
            Ok(()) => {}
            // A concurrent signup can race past the existence check;
            // the UNIQUE constraint is the authoritative signal.
            Err(e) if is_unique_violation(&e) => {
                return Err(ApiError::Conflict("Username is already taken".to_string()));
            }
            Err(e) => return Err(ApiError::Database(e)),
        }

        info!(%id, "profile created");

        Ok(SignupResponse {
            message: "Signed up successfully".to_string(),
            data: DevIdentity { id },
        })
    }

    /// Signin with username and password
    ///
    /// Unknown username and wrong password produce the same message so
    /// the response text cannot be used to enumerate usernames.
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        req: LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        let creds = DevRepository::find_credentials_by_username(pool, req.username.trim())
            .await?
            .ok_or_else(|| ApiError::NotFound("Wrong username or password".to_string()))?;

        let valid = password::verify_async(req.password, creds.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;
        if !valid {
            return Err(ApiError::NotFound("Wrong username or password".to_string()));
        }

        let access_token = jwt
            .generate_access_token(&creds.id, &creds.username)
            .map_err(ApiError::Internal)?;
        let refresh_token = jwt
            .generate_refresh_token(&creds.id)
            .map_err(ApiError::Internal)?;

        Ok(LoginResponse {
            message: "Logged in successfully".to_string(),
            access_token,
            refresh_token,
            data: DevIdentity { id: creds.id },
        })
    }

    /// Verify a token
    ///
    /// Branches directly on the synchronous validation result; no claim
    /// payload is exposed to the caller.
    pub fn verify(jwt: &JwtService, req: &VerifyTokenRequest) -> Result<MessageResponse, ApiError> {
        if req.token.is_empty() {
            return Err(ApiError::Unauthorized("Missing token".to_string()));
        }
        jwt.validate_token(&req.token)
            .map_err(|_| ApiError::Unauthorized("Unauthorized".to_string()))?;

        Ok(MessageResponse {
            message: "Authorized".to_string(),
        })
    }
}
