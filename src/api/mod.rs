//! REST API surface.
//!
//! # Routes
//! ```text
//! GET    /actors          list          public
//! GET    /actors/{id}     get by id     public
//! POST   /actors          create        bearer (when auth enabled)
//! PUT    /actors/{id}     full replace  bearer (when auth enabled)
//! DELETE /actors/{id}     delete        bearer (when auth enabled)
//! (same for /movies)
//! GET    /health          store ping
//! ```

pub mod actors;
pub mod auth;
pub mod docs;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod movies;
pub mod schemas;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use docs::ApiDoc;
pub use error::{ApiError, ErrorResponse};

use self::auth::require_bearer;
use self::schemas::HealthResponse;
use crate::http::server::AppState;

/// Report liveness and whether the document store answers.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service and store are up", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, code, store) = match state.store() {
        Ok(store) => match store.ping().await {
            Ok(()) => ("ok", StatusCode::OK, store.backend()),
            Err(e) => {
                tracing::warn!(error = %e, "Health check ping failed");
                ("degraded", StatusCode::SERVICE_UNAVAILABLE, store.backend())
            }
        },
        Err(_) => ("starting", StatusCode::SERVICE_UNAVAILABLE, "none"),
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            store: store.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Resource routes. Mutating methods sit behind [`require_bearer`].
pub fn routes(state: AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), require_bearer);

    let mut router = Router::new()
        .route(
            "/actors",
            get(actors::list_actors).merge(post(actors::create_actor).route_layer(guard.clone())),
        )
        .route(
            "/actors/{id}",
            get(actors::get_actor).merge(
                put(actors::update_actor)
                    .delete(actors::delete_actor)
                    .route_layer(guard.clone()),
            ),
        )
        .route(
            "/movies",
            get(movies::list_movies).merge(post(movies::create_movie).route_layer(guard.clone())),
        )
        .route(
            "/movies/{id}",
            get(movies::get_movie).merge(
                put(movies::update_movie)
                    .delete(movies::delete_movie)
                    .route_layer(guard),
            ),
        )
        .route("/health", get(health));

    let docs = &state.config.docs;
    if docs.enabled {
        let doc_url = format!("{}/openapi.json", docs.path.trim_end_matches('/'));
        router = router.merge(SwaggerUi::new(docs.path.clone()).url(doc_url, ApiDoc::openapi()));
    }

    router
}
