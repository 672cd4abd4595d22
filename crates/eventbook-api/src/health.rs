// Health check HTTP routes
//
// /api/health probes the database; /api/simple-health answers even when
// the database is down, so deploys can tell the two failure modes apart.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use eventbook_storage::Database;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

const SERVICE_NAME: &str = "event-booking-backend";

/// App state for the database-backed health route
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Create health routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health).with_state(state))
        .route("/api/simple-health", get(simple_health))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub service: &'static str,
    pub database: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimpleHealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
    pub service: &'static str,
    pub message: &'static str,
}

/// GET /api/health - Service and database connectivity
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Health report", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.ping().await {
        Ok(()) => "Connected".to_string(),
        Err(err) => {
            tracing::error!("database health check failed: {err:#}");
            format!("Disconnected: {err}")
        }
    };

    Json(HealthResponse {
        status: "UP",
        timestamp: Utc::now().timestamp_millis(),
        service: SERVICE_NAME,
        database,
    })
}

/// GET /api/simple-health - Liveness only, no database involved
#[utoipa::path(
    get,
    path = "/api/simple-health",
    responses(
        (status = 200, description = "Liveness report", body = SimpleHealthResponse)
    ),
    tag = "health"
)]
pub async fn simple_health() -> Json<SimpleHealthResponse> {
    Json(SimpleHealthResponse {
        status: "UP",
        timestamp: Utc::now().timestamp_millis(),
        service: SERVICE_NAME,
        message: "Service is running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_simple_health_answers_without_a_database() {
        let app = Router::new().route("/api/simple-health", get(simple_health));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/simple-health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "UP");
        assert_eq!(json["service"], SERVICE_NAME);
        assert!(json["timestamp"].as_i64().unwrap() > 0);
    }
}
