//! `/actors` endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::error::{ApiError, ErrorResponse};
use super::extract::ValidatedJson;
use super::handlers;
use super::schemas::{CreatedResponse, MessageResponse};
use crate::catalog::{Actor, ActorInput, ActorView};
use crate::http::server::AppState;

/// List every actor.
#[utoipa::path(
    get,
    path = "/actors",
    tag = "actors",
    responses(
        (status = 200, description = "List of actors", body = [ActorView]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_actors(State(state): State<AppState>) -> Result<Json<Vec<ActorView>>, ApiError> {
    handlers::list::<Actor>(&state).await
}

/// Get an actor by ID.
#[utoipa::path(
    get,
    path = "/actors/{id}",
    tag = "actors",
    params(("id" = String, Path, description = "Actor ObjectId")),
    responses(
        (status = 200, description = "Actor object", body = ActorView),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ActorView>, ApiError> {
    handlers::get::<Actor>(&state, &id).await
}

/// Create a new actor.
#[utoipa::path(
    post,
    path = "/actors",
    tag = "actors",
    request_body = ActorInput,
    responses(
        (status = 201, description = "Actor created", body = CreatedResponse),
        (status = 400, description = "Actor name is required", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_actor(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ActorInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    handlers::create::<Actor>(&state, input).await
}

/// Replace an actor.
#[utoipa::path(
    put,
    path = "/actors/{id}",
    tag = "actors",
    params(("id" = String, Path, description = "Actor ObjectId")),
    request_body = ActorInput,
    responses(
        (status = 204, description = "Actor updated"),
        (status = 400, description = "Malformed ID or missing name", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<ActorInput>,
) -> Result<StatusCode, ApiError> {
    handlers::update::<Actor>(&state, &id, input).await
}

/// Delete an actor.
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    tag = "actors",
    params(("id" = String, Path, description = "Actor ObjectId")),
    responses(
        (status = 200, description = "Actor deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Actor not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::remove::<Actor>(&state, &id).await
}
