//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use relay_axum::{CorsConfig, DEFAULT_PORT, ServerConfig};
use relay_core::{DEFAULT_KEEP_ALIVE_SECS, DEFAULT_QUEUE_CAPACITY, RelaySettings};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay web server
    Serve(ServeArgs),

    /// Print the echo transform of a string as JSON
    Echo {
        /// Text to transform
        input: String,
    },
}

/// Arguments for `relay serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory of extra static assets served for unmatched paths
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable). Any origin is allowed when omitted.
    #[arg(long = "allow-origin")]
    pub allow_origins: Vec<String>,

    /// Messages a single client may have pending before new ones are dropped
    #[arg(long, env = "RELAY_QUEUE_CAPACITY", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    pub queue_capacity: usize,

    /// Seconds between keep-alive comments on idle streams
    #[arg(long, env = "RELAY_KEEP_ALIVE_SECS", default_value_t = DEFAULT_KEEP_ALIVE_SECS)]
    pub keep_alive_secs: u64,
}

impl ServeArgs {
    /// Build the server configuration these arguments describe.
    pub fn into_config(self) -> ServerConfig {
        let cors = if self.allow_origins.is_empty() {
            CorsConfig::AllowAll
        } else {
            CorsConfig::AllowOrigins(self.allow_origins)
        };

        ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: self.static_dir,
            cors,
            settings: RelaySettings {
                queue_capacity: self.queue_capacity,
                keep_alive_secs: self.keep_alive_secs,
            },
        }
    }
}
