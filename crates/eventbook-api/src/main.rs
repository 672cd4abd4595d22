// Eventbook API server
// Decision: Stateless request handling; the database is the only shared state
// Decision: Role checks run in handlers, before any service call

mod admin;
mod auth;
mod common;
mod error;
mod health;
mod public;
mod services;
mod users;
mod vendor;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{Extension, Router};
use eventbook_storage::Database;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::services::{AuthService, EventService, UserService};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::routes::login,
        auth::routes::register,
        public::list_approved_events,
        public::get_event,
        public::search_events,
        public::events_by_location,
        users::get_profile,
        vendor::list_own_events,
        vendor::create_event,
        vendor::update_event,
        vendor::delete_event,
        admin::list_events_by_status,
        admin::set_event_status,
        health::health,
        health::simple_health,
    ),
    components(
        schemas(
            eventbook_core::User, eventbook_core::UserRole,
            eventbook_core::Event, eventbook_core::EventStatus,
            auth::routes::LoginRequest,
            auth::routes::LoginResponse,
            auth::routes::RegisterRequest,
            vendor::CreateEventRequest,
            vendor::UpdateEventRequest,
            admin::UpdateStatusRequest,
            common::MessageResponse,
            health::HealthResponse,
            health::SimpleHealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "public", description = "Public event discovery endpoints"),
        (name = "users", description = "User profile endpoints"),
        (name = "vendor", description = "Vendor event management endpoints"),
        (name = "admin", description = "Event moderation endpoints"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Eventbook API",
        version = "0.1.0",
        description = "Event-booking backend: public event discovery, vendor listings, admin moderation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

/// Registers the bearer scheme referenced by the protected paths
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventbook_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    tracing::info!("eventbook-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.migrate().await.context("Failed to run migrations")?;
    tracing::info!("Connected to database");

    let db = Arc::new(db);

    // Load authentication configuration
    let auth_config = Arc::new(auth::AuthConfig::from_env());
    let auth_state = auth::AuthState {
        config: auth_config.clone(),
    };

    // Create module-specific states
    let event_service = Arc::new(EventService::new(db.clone()));
    let auth_routes_state = auth::routes::AppState {
        service: Arc::new(AuthService::new(db.clone(), auth_config)),
    };
    let public_state = public::AppState {
        service: event_service.clone(),
    };
    let users_state = users::AppState {
        service: Arc::new(UserService::new(db.clone())),
    };
    let vendor_state = vendor::AppState {
        service: event_service.clone(),
    };
    let admin_state = admin::AppState {
        service: event_service,
    };
    let health_state = health::AppState { db };

    // Load CORS allowed origins from environment (optional)
    // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
    }

    // Build main router
    let app = Router::new()
        .merge(auth::routes(auth_routes_state))
        .merge(public::routes(public_state))
        .merge(users::routes(users_state))
        .merge(vendor::routes(vendor_state))
        .merge(admin::routes(admin_state))
        .merge(health::routes(health_state));

    // Add Swagger UI
    let app =
        app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if !cors_origins.is_empty() {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]),
        )
    } else {
        app
    };

    // Auth state for the bearer extractor, then request tracing
    let app = app
        .layer(Extension(auth_state))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
