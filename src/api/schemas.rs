//! Response bodies shared by both resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `201 Created`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier generated by the store.
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
}

/// Confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Actor deleted")]
    pub message: String,
}

/// Liveness and store reachability.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "mongodb")]
    pub store: String,
    pub version: String,
}
