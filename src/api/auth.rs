//! Bearer token gate for mutating routes.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use super::error::ApiError;
use crate::http::server::AppState;

/// Reject the request with 401 unless it carries the configured bearer token.
/// Passes everything through when auth is disabled.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = &state.config.auth;
    if !auth.enabled {
        return Ok(next.run(request).await);
    }

    let expected = auth.token.as_deref().unwrap_or_default();
    let presented = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized("Missing bearer token"))?;

    let verdict = match bearer_token(presented) {
        Some(token) if token_matches(token, expected) => Ok(()),
        Some(_) => Err(ApiError::Unauthorized("Invalid bearer token")),
        None => Err(ApiError::Unauthorized("Malformed Authorization header")),
    };

    if let Err(err) = verdict {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = %err,
            "Rejected unauthenticated write"
        );
        return Err(err);
    }
    Ok(next.run(request).await)
}

/// Compare without short-circuiting on the first differing byte. An empty
/// configured token never matches.
fn token_matches(presented: &str, expected: &str) -> bool {
    !expected.is_empty()
        && constant_time_eq::constant_time_eq(presented.as_bytes(), expected.as_bytes())
}

/// Extract the credential from `Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bearer_scheme() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer   abc "), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer  "), None);
    }

    #[test]
    fn token_comparison() {
        assert!(token_matches("s3cret", "s3cret"));
        assert!(!token_matches("s3cre", "s3cret"));
        assert!(!token_matches("s3cret!", "s3cret"));
        assert!(!token_matches("S3cret", "s3cret"));
        assert!(!token_matches("", ""));
    }
}
