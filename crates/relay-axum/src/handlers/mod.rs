//! HTTP request handlers for the Axum web server.
//!
//! Each submodule contains handlers for one area.
//! Handlers are thin wrappers that delegate to the broadcaster in `AppState`.

pub mod chat;
pub mod echo;
pub mod events;
pub mod pages;
