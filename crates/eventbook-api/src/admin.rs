// Admin event moderation HTTP routes
//
// The approval decision lives here: PENDING listings become APPROVED or
// REJECTED, and only then appear on the public surface.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use eventbook_core::{Error, Event, EventStatus, UserRole};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::services::EventService;

/// App state for admin routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

/// Create admin routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/events", get(list_events_by_status))
        .route("/api/admin/events/:event_id/status", put(set_event_status))
        .with_state(state)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StatusParams {
    /// Lifecycle status to list (PENDING is the moderation queue)
    pub status: EventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: EventStatus,
}

/// GET /api/admin/events?status= - Events in a given status, newest first
#[utoipa::path(
    get,
    path = "/api/admin/events",
    params(StatusParams),
    responses(
        (status = 200, description = "Events in the requested status", body = Vec<Event>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Insufficient role")
    ),
    security(("bearerAuth" = [])),
    tag = "admin"
)]
pub async fn list_events_by_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    auth.require_role(&[UserRole::Admin])?;

    let events = state.service.events_by_status(params.status).await?;
    Ok(Json(events))
}

/// PUT /api/admin/events/:event_id/status - Transition an event's lifecycle status
#[utoipa::path(
    put,
    path = "/api/admin/events/{event_id}/status",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Updated event", body = Event),
        (status = 403, description = "Insufficient role"),
        (status = 404, description = "Event not found")
    ),
    security(("bearerAuth" = [])),
    tag = "admin"
)]
pub async fn set_event_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Event>, ApiError> {
    auth.require_role(&[UserRole::Admin])?;

    let event = state
        .service
        .set_status(event_id, req.status)
        .await?
        .ok_or(Error::NotFound)?;

    tracing::info!(event_id = %event.id, status = %event.status, "event status changed");

    Ok(Json(event))
}
