//! Route definitions for the HTTP API.

pub mod auth;
pub mod health;
pub mod notes;
pub mod share;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(notes::routes())
        .merge(share::routes())
        .with_state(state)
}
