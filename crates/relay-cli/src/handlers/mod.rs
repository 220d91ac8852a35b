//! Command handlers.
//!
//! Thin wrappers that turn parsed arguments into calls on the relay crates
//! and format output for the terminal.

pub mod echo;
pub mod serve;
