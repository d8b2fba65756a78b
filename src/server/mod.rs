use crate::config::Config;
use crate::streaming;
use anyhow::{Context, Result};
use axum::{middleware, routing::get, Router};
use signbridge_common::WordIndex;
use signbridge_db::pool::DbPool;
use signbridge_db::SqliteWordIndex;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod request_id;
pub mod routes_api;
pub mod routes_words;

pub use error::AppError;

/// Shared application context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    /// Word to clip lookup used by the translation endpoint
    pub word_index: Arc<dyn WordIndex>,
    /// Database connection pool (absent when running on a fixed word index)
    pub db_pool: Option<DbPool>,
}

impl AppContext {
    /// Context backed by the SQLite word table.
    pub fn new(config: Config, db_pool: DbPool) -> Self {
        Self {
            config: Arc::new(config),
            word_index: Arc::new(SqliteWordIndex::new(db_pool.clone())),
            db_pool: Some(db_pool),
        }
    }

    /// Context backed by an arbitrary word index and no database.
    pub fn with_index(config: Config, word_index: Arc<dyn WordIndex>) -> Self {
        Self {
            config: Arc::new(config),
            word_index,
            db_pool: None,
        }
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes_api::health))
        .nest(
            "/api",
            routes_api::api_routes().merge(routes_words::word_routes()),
        )
        .nest("/videos", streaming::video_router())
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Create the video root and its `words/` and `output/` folders.
pub fn prepare_video_dirs(config: &Config) -> Result<()> {
    for dir in [config.videos.words_dir(), config.videos.output_dir()] {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create video folder {:?}", dir))?;
    }
    Ok(())
}

/// Start the HTTP server and run until a shutdown signal arrives
pub async fn start_server(config: Config, db_pool: DbPool) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    prepare_video_dirs(&config)?;
    tracing::info!(
        "Videos folder: {:?}",
        std::fs::canonicalize(&config.videos.root).unwrap_or_else(|_| config.videos.root.clone())
    );

    let app = create_router(AppContext::new(config, db_pool));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
