//! Actors & movies catalog REST API.
//!
//! CRUD over two MongoDB collections with optional bearer token gating on
//! writes and generated OpenAPI documentation.

pub mod api;
pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;
pub mod store;

pub use config::AppConfig;
pub use http::{AppState, HttpServer};
pub use lifecycle::Shutdown;
