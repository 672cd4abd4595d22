// Public event discovery HTTP routes (no authentication)

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use eventbook_core::{Error, Event};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for public routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

/// Create public event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/public/events", get(list_approved_events))
        .route("/api/public/events/search", get(search_events))
        .route("/api/public/events/location", get(events_by_location))
        .route("/api/public/events/:event_id", get(get_event))
        .with_state(state)
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring matched against title or description
    pub query: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LocationParams {
    /// Case-insensitive substring matched against the event location
    pub location: String,
}

/// GET /api/public/events - List approved events, newest first
#[utoipa::path(
    get,
    path = "/api/public/events",
    responses(
        (status = 200, description = "Approved events", body = Vec<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "public"
)]
pub async fn list_approved_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.approved_events().await?;
    Ok(Json(events))
}

/// GET /api/public/events/:event_id - Approved event detail
#[utoipa::path(
    get,
    path = "/api/public/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Missing or not approved")
    ),
    tag = "public"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .approved_event(event_id)
        .await?
        .ok_or(Error::NotFound)?;

    Ok(Json(event))
}

/// GET /api/public/events/search?query= - Search approved events
#[utoipa::path(
    get,
    path = "/api/public/events/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching approved events", body = Vec<Event>)
    ),
    tag = "public"
)]
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.search_approved(&params.query).await?;
    Ok(Json(events))
}

/// GET /api/public/events/location?location= - Approved events by location
#[utoipa::path(
    get,
    path = "/api/public/events/location",
    params(LocationParams),
    responses(
        (status = 200, description = "Matching approved events", body = Vec<Event>)
    ),
    tag = "public"
)]
pub async fn events_by_location(
    State(state): State<AppState>,
    Query(params): Query<LocationParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.approved_by_location(&params.location).await?;
    Ok(Json(events))
}
