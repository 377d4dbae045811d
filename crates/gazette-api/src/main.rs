// Gazette API server
// Decision: No DATABASE_URL runs an in-memory store seeded with sample content

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use gazette_api::{
    build_app,
    config::ServerConfig,
    session::SessionTokenService,
    storage::{seed, StorageBackend},
    AppState,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gazette_api=debug,gazette_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("gazette-api starting...");

    let config = ServerConfig::from_env();
    let store = init_storage(&config).await?;
    tracing::info!(storage = store.kind(), "Storage configured");

    let sessions = SessionTokenService::new(config.session.clone());
    tracing::info!(
        max_age_secs = sessions.max_age_secs(),
        secure = config.session.secure,
        "Session cookies configured"
    );

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let state = AppState::new(store, sessions);
    let app = build_app(state, &config.api_prefix);

    // Add CORS layer only if origins are configured
    let cors_origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                .allow_credentials(true),
        )
    };

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("HTTP server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Connect, migrate and optionally seed PostgreSQL, or build the seeded dev store
async fn init_storage(config: &ServerConfig) -> Result<StorageBackend> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, running in dev mode with in-memory storage");
        let backend = StorageBackend::in_memory();
        if let StorageBackend::InMemory(store) = &backend {
            seed::seed_in_memory(store).await;
        }
        return Ok(backend);
    };

    let backend = StorageBackend::postgres(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    if let StorageBackend::Postgres(db) = &backend {
        db.migrate().await.context("Failed to run migrations")?;
        tracing::info!("Database migrations applied");

        if config.seed_database {
            seed::seed_postgres(db)
                .await
                .context("Failed to seed database")?;
        }
    }

    Ok(backend)
}
