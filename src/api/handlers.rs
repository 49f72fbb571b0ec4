//! Resource-agnostic CRUD handlers.
//!
//! `actors.rs` and `movies.rs` expose annotated, concrete endpoints that
//! delegate here. Each function performs exactly one store call.

use axum::{http::StatusCode, Json};
use mongodb::bson::oid::ObjectId;

use super::error::ApiError;
use super::schemas::{CreatedResponse, MessageResponse};
use crate::catalog::{Repository, Resource};
use crate::http::server::AppState;

fn repository<R: Resource>(state: &AppState) -> Result<Repository<R>, ApiError> {
    Ok(Repository::new(state.store()?))
}

/// Parse a path identifier, rejecting anything that is not an ObjectId.
pub fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub async fn list<R: Resource>(state: &AppState) -> Result<Json<Vec<R::View>>, ApiError> {
    let records = repository::<R>(state)?.list().await?;
    tracing::debug!(collection = R::COLLECTION, count = records.len(), "Listed documents");
    Ok(Json(records.into_iter().map(|s| s.into_view()).collect()))
}

pub async fn get<R: Resource>(state: &AppState, raw_id: &str) -> Result<Json<R::View>, ApiError> {
    let id = parse_id(raw_id)?;
    repository::<R>(state)?
        .get(id)
        .await?
        .map(|stored| Json(stored.into_view()))
        .ok_or(ApiError::NotFound(R::LABEL))
}

pub async fn create<R: Resource>(
    state: &AppState,
    input: R::Input,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let record = R::from_input(input);
    let id = repository::<R>(state)?.create(&record).await?;
    tracing::info!(collection = R::COLLECTION, id = %id, "Document created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: id.to_hex() }),
    ))
}

pub async fn update<R: Resource>(
    state: &AppState,
    raw_id: &str,
    input: R::Input,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(raw_id)?;
    let record = R::from_input(input);
    if !repository::<R>(state)?.replace(id, &record).await? {
        return Err(ApiError::NotFound(R::LABEL));
    }
    tracing::info!(collection = R::COLLECTION, id = %id, "Document replaced");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove<R: Resource>(
    state: &AppState,
    raw_id: &str,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(raw_id)?;
    if !repository::<R>(state)?.delete(id).await? {
        return Err(ApiError::NotFound(R::LABEL));
    }
    tracing::info!(collection = R::COLLECTION, id = %id, "Document deleted");
    Ok(Json(MessageResponse {
        message: format!("{} deleted", R::LABEL),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_only_object_ids() {
        let id = ObjectId::new();
        assert_eq!(parse_id(&id.to_hex()).unwrap(), id);
        assert!(matches!(parse_id("not-an-id"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId(_))));
        assert!(matches!(
            parse_id("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(ApiError::InvalidId(_))
        ));
    }
}
