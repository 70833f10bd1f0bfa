//! Authentication routes: signup, signin and token verification
//!
//! Password hashing and verification run on the blocking thread pool;
//! token operations use the pre-computed keys from AppState.

use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use devfolio_shared::types::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse,
    VerifyTokenRequest,
};

/// Create auth routes (merged under /api/devs)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/verify", post(verify))
}

/// Register a new profile
///
/// POST /api/devs/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let response = AuthService::signup(&state.db, req).await?;
    Ok(Json(response))
}

/// Signin with username and password
///
/// POST /api/devs/signin
async fn signin(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let response = AuthService::login(&state.db, state.jwt(), req).await?;
    Ok(Json(response))
}

/// Verify a token
///
/// POST /api/devs/verify
async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyTokenRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = AuthService::verify(state.jwt(), &req)?;
    Ok(Json(response))
}
