//! `/movies` endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::error::{ApiError, ErrorResponse};
use super::extract::ValidatedJson;
use super::handlers;
use super::schemas::{CreatedResponse, MessageResponse};
use crate::catalog::{Movie, MovieInput, MovieView};
use crate::http::server::AppState;

/// List every movie.
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "List of movies", body = [MovieView]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<MovieView>>, ApiError> {
    handlers::list::<Movie>(&state).await
}

/// Get a movie by ID.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    responses(
        (status = 200, description = "Movie object", body = MovieView),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieView>, ApiError> {
    handlers::get::<Movie>(&state, &id).await
}

/// Create a new movie.
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = MovieInput,
    responses(
        (status = 201, description = "Movie created", body = CreatedResponse),
        (status = 400, description = "Movie title is required", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_movie(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    handlers::create::<Movie>(&state, input).await
}

/// Replace a movie.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    request_body = MovieInput,
    responses(
        (status = 204, description = "Movie updated"),
        (status = 400, description = "Malformed ID or missing title", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<MovieInput>,
) -> Result<StatusCode, ApiError> {
    handlers::update::<Movie>(&state, &id, input).await
}

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Movie ObjectId")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 404, description = "Movie not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    handlers::remove::<Movie>(&state, &id).await
}
