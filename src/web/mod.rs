//! Commit hash HTTP API
//!
//! Serves the current version identifier to the frontend at runtime.

pub mod server;

pub use server::{configure, start_web_server, ServerState};
