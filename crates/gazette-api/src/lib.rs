// Gazette API Library
// Decision: Shared library for the server binary and integration tests
// Decision: One AppState for every route module; extractors pull what they need via FromRef

use axum::{
    extract::{FromRef, State},
    routing::get,
    Json, Router,
};
use gazette_core::{AccessPolicy, SessionLifecycle};
use serde::Serialize;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// API routes and types
pub mod api;

// Environment configuration
pub mod config;

// OpenAPI spec generation
pub mod openapi;

// Cookie sessions
pub mod session;

// Storage layer
pub mod storage;

use crate::session::SessionTokenService;
use crate::storage::StorageBackend;

/// App state shared across routes
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: Arc<StorageBackend>,
    pub sessions: Arc<SessionTokenService>,
    pub policy: AccessPolicy,
    pub lifecycle: SessionLifecycle,
}

impl AppState {
    pub fn new(store: StorageBackend, sessions: SessionTokenService) -> Self {
        Self {
            store: Arc::new(store),
            sessions: Arc::new(sessions),
            policy: AccessPolicy::new(),
            lifecycle: SessionLifecycle::new(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    storage: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.store.kind(),
    })
}

/// All content and session routes, unprefixed
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .merge(api::articles::routes(state.clone()))
        .merge(api::members::routes(state.clone()))
        .merge(api::sessions::routes(state))
}

/// Full application: health (never prefixed), prefixed API routes, Swagger UI
pub fn build_app(state: AppState, api_prefix: &str) -> Router {
    let app = Router::new().route("/health", get(health).with_state(state.clone()));
    let app = app.merge(build_router_with_prefix(api_routes(state), api_prefix));

    app.merge(
        SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", openapi::ApiDoc::openapi()),
    )
}

/// Build router with optional API prefix
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}
