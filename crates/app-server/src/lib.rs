//! HTTP adapter for the Shapeshift descriptor engine
//!
//! This crate extracts a request context from HTTP, hands it to the
//! engine in `app-ui` and serializes the descriptor back. It also serves
//! the catalog, analytics and health endpoints.
//!
//! # Endpoints
//!
//! - `GET  /api/ui-config?screen=<route>&id=<param>` (optional `X-User-ID`)
//! - `GET  /api/products/:id`
//! - `POST /api/analytics`
//! - `GET  /health`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ServerError;
pub use routes::build_router;

use app_core::{AnalyticsSink, Clock, ProductCatalog, StaticCatalog, SystemClock, TracingSink};
use app_ui::{Context, Mode, ScreenComposer};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Descriptor composer
    pub composer: ScreenComposer,
    /// Product catalog
    pub catalog: Arc<dyn ProductCatalog>,
    /// Wall clock
    pub clock: Arc<dyn Clock>,
    /// Analytics destination
    pub analytics: Arc<dyn AnalyticsSink>,
    /// Mode pinned by configuration
    pub mode_override: Option<Mode>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(StaticCatalog::new()),
            Arc::new(SystemClock),
            Arc::new(TracingSink),
        )
    }
}

impl AppState {
    /// State over the given collaborators
    pub fn new(
        catalog: Arc<dyn ProductCatalog>,
        clock: Arc<dyn Clock>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            composer: ScreenComposer::new(catalog.clone()),
            catalog,
            clock,
            analytics,
            mode_override: None,
        }
    }

    /// Pin every request to one mode
    pub fn with_mode_override(mut self, mode: Option<Mode>) -> Self {
        self.mode_override = mode;
        self
    }

    /// Mode for a request: the pinned one, else the one its time implies
    pub fn mode_for(&self, ctx: &Context) -> Mode {
        self.mode_override.unwrap_or_else(|| ctx.mode())
    }
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
