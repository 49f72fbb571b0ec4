//! OpenAPI documentation generation.
//!
//! The document is assembled from the `#[utoipa::path]` annotations on every
//! handler, so it cannot drift from the routes that are actually mounted.

use std::path::Path;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::error::{ErrorResponse, FieldError};
use super::schemas::{CreatedResponse, HealthResponse, MessageResponse};
use crate::catalog::{ActorInput, ActorView, MovieInput, MovieView};

/// Main OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cinema API",
        version = "1.0.0",
        description = "Actors & Movies API"
    ),
    paths(
        super::actors::list_actors,
        super::actors::get_actor,
        super::actors::create_actor,
        super::actors::update_actor,
        super::actors::delete_actor,
        super::movies::list_movies,
        super::movies::get_movie,
        super::movies::create_movie,
        super::movies::update_movie,
        super::movies::delete_movie,
        super::health,
    ),
    components(schemas(
        ActorInput,
        ActorView,
        MovieInput,
        MovieView,
        CreatedResponse,
        MessageResponse,
        HealthResponse,
        ErrorResponse,
        FieldError,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "actors", description = "Actor management"),
        (name = "movies", description = "Movie management"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by mutating routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Write the OpenAPI document to `path` as pretty-printed JSON.
pub fn write_openapi(path: &Path) -> std::io::Result<()> {
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(std::io::Error::other)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "OpenAPI document written");
    Ok(())
}
