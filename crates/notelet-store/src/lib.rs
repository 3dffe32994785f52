//! notelet-store: storage layer for the notelet service.
//!
//! This crate provides:
//! - PostgreSQL storage for users, notes, and share relations
//! - Migration management (embedded, idempotent SQL)
//! - The note listing query composer (filter + search + pagination)
//! - Type-safe database operations via sqlx
//!
//! The store is the single source of truth; there is no in-process cache.
//! Every method is a short-lived read/write sequence against the pool.
//! The listing path's count-then-fetch is not transactional: a concurrent
//! write between the two statements can make the total drift from the
//! fetched page.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notelet_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let page = store.list_notes(&query).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::*;
pub use store::{Store, StoreConfig};

// Re-export notelet-core for downstream crates
pub use notelet_core;
