//! Security response headers.
//!
//! # Responsibilities
//! - Add conservative browser security headers to every response
//! - Leave headers already set by a handler untouched
//!
//! # Design Decisions
//! - Applied as a single tower layer so handlers stay unaware of it
//! - Swagger UI needs inline scripts, so no Content-Security-Policy is set

use axum::http::{header, HeaderValue};
use tower::layer::util::{Identity, Stack};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

/// Layer stack installing the security headers.
pub type SecurityHeadersLayer = Stack<
    SetResponseHeaderLayer<HeaderValue>,
    Stack<
        SetResponseHeaderLayer<HeaderValue>,
        Stack<SetResponseHeaderLayer<HeaderValue>, Identity>,
    >,
>;

/// `X-Content-Type-Options`, `X-Frame-Options`, and `Referrer-Policy`.
pub fn security_headers() -> SecurityHeadersLayer {
    ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .into_inner()
}
