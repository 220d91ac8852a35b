//! Command-line entry point for the chat relay.
//!
//! The binary in `main.rs` is the composition root: it loads `.env`,
//! initializes logging, parses arguments and dispatches to `handlers`.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
