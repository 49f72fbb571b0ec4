//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → body size limit (tower-http, configured in http::server)
//!     → api::auth (bearer token on writes)
//! Outgoing response:
//!     → headers.rs (nosniff, frame denial, referrer policy)
//! ```

pub mod headers;
