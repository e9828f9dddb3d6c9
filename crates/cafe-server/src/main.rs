//! Cafe Listing Server
//!
//! Serves the landing page, the cafe table and the add-a-cafe form.
//!
//! Uses SQLite (embedded) for storage.

mod error;
mod handlers;
mod settings;
mod storage;
mod views;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use cafe_core::CafeStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::ServerConfig;
use storage::{Database, MemoryStore};

const DEFAULT_LOG_FILTER: &str = "cafe_server=info,tower_http=info";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CafeStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn CafeStore>) -> Self {
        Self { store }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Cafe Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, in_memory={}",
        config.bind_address, config.in_memory
    );

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    // Keep the concrete handle so the pool can be closed on shutdown
    let mut database = None;
    let store: Arc<dyn CafeStore> = if config.in_memory {
        info!("Using in-memory store; cafes are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        let database_path = config.database_path();
        let db = Arc::new(
            Database::new(&database_path)
                .await
                .context("Failed to initialize database")?,
        );
        info!("SQLite database initialized at: {}", database_path);
        database = Some(db.clone());
        db
    };

    let app = app(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    if let Some(db) = database {
        db.close().await;
    }
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Build the HTTP router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::index))
        .route("/cafes", get(handlers::cafes::list))
        .route("/add", get(handlers::add::form).post(handlers::add::submit))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new().route("/cafes", get(handlers::api::list))
}
