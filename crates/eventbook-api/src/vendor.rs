// Vendor event management HTTP routes
//
// Vendors manage their own listings; admins may act on any. Ownership is
// checked here, before the service is asked to change anything.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use eventbook_core::{Error, Event, UserRole};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::EventService;

/// App state for vendor routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

/// Create vendor routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/vendor/events",
            get(list_own_events).post(create_event),
        )
        .route(
            "/api/vendor/events/:event_id",
            put(update_event).delete(delete_event),
        )
        .with_state(state)
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ticket_price: Option<f64>,
    #[serde(default)]
    pub max_attendees: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Partial update. No status field: approval is an admin-only transition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ticket_price: Option<f64>,
    #[serde(default)]
    pub max_attendees: Option<i32>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Owner or admin; everyone else gets 403 without touching the service
fn check_ownership(auth: &AuthUser, event: &Event) -> Result<(), ApiError> {
    if auth.role() == UserRole::Admin || event.vendor_id == auth.user_id() {
        Ok(())
    } else {
        Err(Error::Authorization.into())
    }
}

/// GET /api/vendor/events - The caller's own events, every status
#[utoipa::path(
    get,
    path = "/api/vendor/events",
    responses(
        (status = 200, description = "Caller's events, all statuses", body = Vec<Event>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Insufficient role")
    ),
    security(("bearerAuth" = [])),
    tag = "vendor"
)]
pub async fn list_own_events(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    auth.require_role(&[UserRole::Vendor, UserRole::Admin])?;

    let events = state.service.events_by_vendor(auth.user_id()).await?;
    Ok(Json(events))
}

/// POST /api/vendor/events - Create a listing; it starts PENDING
#[utoipa::path(
    post,
    path = "/api/vendor/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created, pending approval", body = Event),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Insufficient role")
    ),
    security(("bearerAuth" = [])),
    tag = "vendor"
)]
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    auth.require_role(&[UserRole::Vendor, UserRole::Admin])?;

    let event = state.service.create(auth.user_id(), req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/vendor/events/:event_id - Update an owned listing
#[utoipa::path(
    put,
    path = "/api/vendor/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Event not found")
    ),
    security(("bearerAuth" = [])),
    tag = "vendor"
)]
pub async fn update_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    auth.require_role(&[UserRole::Vendor, UserRole::Admin])?;

    let existing = state.service.get(event_id).await?.ok_or(Error::NotFound)?;
    check_ownership(&auth, &existing)?;

    let event = state
        .service
        .update(event_id, req)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(event))
}

/// DELETE /api/vendor/events/:event_id - Remove an owned listing
#[utoipa::path(
    delete,
    path = "/api/vendor/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Event not found")
    ),
    security(("bearerAuth" = [])),
    tag = "vendor"
)]
pub async fn delete_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    auth.require_role(&[UserRole::Vendor, UserRole::Admin])?;

    let existing = state.service.get(event_id).await?.ok_or(Error::NotFound)?;
    check_ownership(&auth, &existing)?;

    if state.service.delete(event_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound.into())
    }
}
