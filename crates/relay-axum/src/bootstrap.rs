//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where the relay is wired together for the
//! web adapter. The broadcaster is created here once and lives for the
//! lifetime of the process.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use relay_core::{Broadcaster, RelaySettings, validate_settings};
use tokio::net::TcpListener;

/// Default port when neither a flag nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Optional directory of extra static assets served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Broadcast and stream tunables.
    pub settings: RelaySettings,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
            cors: CorsConfig::default(),
            settings: RelaySettings::with_defaults(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Replace the relay settings.
    #[must_use]
    pub fn with_settings(mut self, settings: RelaySettings) -> Self {
        self.settings = settings;
        self
    }

    /// `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
#[derive(Debug)]
pub struct AxumContext {
    /// The single broadcaster shared by all connections.
    pub broadcaster: Arc<Broadcaster>,
    /// Validated relay settings.
    pub settings: RelaySettings,
}

/// Validate configuration and build the application context.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    validate_settings(&config.settings).context("invalid relay settings")?;

    tracing::info!(
        target: "relay.bootstrap",
        queue_capacity = config.settings.queue_capacity,
        keep_alive_secs = config.settings.keep_alive_secs,
        static_dir = ?config.static_dir,
        "Axum bootstrap complete"
    );

    Ok(AxumContext {
        broadcaster: Arc::new(Broadcaster::new()),
        settings: config.settings,
    })
}

/// Build the router for `config` around an existing context.
pub fn build_app(ctx: AxumContext, config: &ServerConfig) -> axum::Router {
    match config.static_dir {
        Some(ref static_dir) => {
            tracing::info!("Serving static assets from: {}", static_dir.display());
            crate::routes::create_static_router(ctx, static_dir, &config.cors)
        }
        None => crate::routes::create_router(ctx, &config.cors),
    }
}

/// Start the web server and run until Ctrl+C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = build_app(ctx, &config);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local: SocketAddr = listener.local_addr()?;

    tracing::info!("chat relay listening on http://{}", local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("chat relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
