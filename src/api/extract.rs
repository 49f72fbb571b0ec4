//! Request extractors.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::ApiError;

/// JSON body that has been deserialized and validated.
///
/// Unreadable bodies and failed validation both become `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_message)?;
        value.validate()?;
        Ok(Self(value))
    }
}

fn rejection_message(rejection: JsonRejection) -> ApiError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!(error = %rejection, "Request body over limit");
        return ApiError::PayloadTooLarge;
    }
    let message = match &rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON".to_string(),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing or invalid Content-Type header. Expected 'application/json'".to_string()
        }
        JsonRejection::BytesRejection(_) => "Failed to read request body".to_string(),
        _ => "Invalid JSON request".to_string(),
    };
    tracing::warn!(error = %rejection, "JSON parsing error");
    ApiError::validation(message)
}
