// User profile HTTP routes

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use eventbook_core::{Error, User, UserRole};
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::UserService;

/// App state for user routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UserService>,
}

/// Create user routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users/profile", get(get_profile))
        .with_state(state)
}

/// GET /api/users/profile - The authenticated caller's account, password omitted
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Profile", body = User),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Account no longer exists")
    ),
    security(("bearerAuth" = [])),
    tag = "users"
)]
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<User>, ApiError> {
    auth.require_role(&[UserRole::User, UserRole::Vendor, UserRole::Admin])?;

    let user = state
        .service
        .profile(auth.user_id())
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(user))
}
