//! HTTP middleware components.

pub mod request_id;
