//! notelet-server: HTTP API server for the notelet service.
//!
//! This crate provides:
//! - REST API endpoints for notes (list, create, read, update, delete, share)
//! - Registration, login, and JWT session management
//! - JSON error responses with a stable code/message envelope
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers resolve the requester from the Bearer token, consult the
//! access rules in notelet-core, and read/write through notelet-store.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notelet_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use notelet_core;
pub use notelet_store;
