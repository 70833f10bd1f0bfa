//! Profile directory routes: list, get, search, update, delete
//!
//! Update and delete require a Bearer access token whose subject
//! matches the target profile.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::DevService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use devfolio_shared::types::{
    DevProfile, DevSummary, MessageResponse, SearchRequest, UpdateDevRequest,
};

/// Create profile directory routes
pub fn dev_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_devs))
        .route("/search", post(search_devs))
        .route("/update", put(update_dev))
        .route("/:id", get(get_dev).delete(delete_dev))
}

/// List all profiles, minimal projection
///
/// GET /api/devs
async fn list_devs(State(state): State<AppState>) -> ApiResult<Json<Vec<DevSummary>>> {
    let devs = DevService::list(&state.db).await?;
    Ok(Json(devs))
}

/// Fetch one full profile by id
///
/// GET /api/devs/:id
async fn get_dev(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DevProfile>> {
    let profile = DevService::get(&state.db, &id).await?;
    Ok(Json(profile))
}

/// Free-text search over the name columns
///
/// POST /api/devs/search
async fn search_devs(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> ApiResult<Json<Vec<DevSummary>>> {
    let devs = DevService::search(&state.db, &req.search).await?;
    Ok(Json(devs))
}

/// Partial update of the caller's own profile
///
/// PUT /api/devs/update
async fn update_dev(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateDevRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let response = DevService::update(&state.db, &auth, req).await?;
    Ok(Json(response))
}

/// Delete the caller's own profile
///
/// DELETE /api/devs/:id
async fn delete_dev(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = DevService::delete(&state.db, &auth, &id).await?;
    Ok(Json(response))
}
