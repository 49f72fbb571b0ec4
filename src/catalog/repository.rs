//! Typed access to a single collection.

use mongodb::bson::{self, oid::ObjectId, Document};
use std::marker::PhantomData;
use std::sync::Arc;

use super::Resource;
use crate::store::{DocumentStore, StoreError, StoreResult};

/// A record together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<R> {
    pub id: ObjectId,
    pub record: R,
}

impl<R: Resource> Stored<R> {
    pub fn into_view(self) -> R::View {
        R::into_view(self.id, self.record)
    }
}

/// Typed wrapper over `DocumentStore` for the collection of `R`.
pub struct Repository<R> {
    store: Arc<dyn DocumentStore>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> Repository<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Every record in the collection. Field values are decoded leniently;
    /// a document whose `_id` is not an ObjectId cannot be addressed by the
    /// API and is skipped with a warning.
    pub async fn list(&self) -> StoreResult<Vec<Stored<R>>> {
        let docs = self.store.find_all(R::COLLECTION).await?;
        Ok(docs
            .into_iter()
            .filter_map(|doc| match decode::<R>(doc) {
                Ok(stored) => Some(stored),
                Err(e) => {
                    tracing::warn!(
                        collection = R::COLLECTION,
                        error = %e,
                        "Skipping undecodable document"
                    );
                    None
                }
            })
            .collect())
    }

    pub async fn get(&self, id: ObjectId) -> StoreResult<Option<Stored<R>>> {
        self.store
            .find_by_id(R::COLLECTION, id)
            .await?
            .map(decode::<R>)
            .transpose()
    }

    pub async fn create(&self, record: &R) -> StoreResult<ObjectId> {
        let doc = bson::to_document(record)?;
        self.store.insert(R::COLLECTION, doc).await
    }

    /// Full replace. Returns `false` when no document has this id.
    pub async fn replace(&self, id: ObjectId, record: &R) -> StoreResult<bool> {
        let doc = bson::to_document(record)?;
        let outcome = self.store.replace(R::COLLECTION, id, doc).await?;
        Ok(outcome.matched > 0)
    }

    /// Returns `false` when nothing was deleted.
    pub async fn delete(&self, id: ObjectId) -> StoreResult<bool> {
        Ok(self.store.delete(R::COLLECTION, id).await? > 0)
    }
}

fn decode<R: Resource>(mut doc: Document) -> StoreResult<Stored<R>> {
    let id = match doc.remove("_id") {
        Some(bson::Bson::ObjectId(id)) => id,
        _ => {
            return Err(StoreError::MissingId {
                collection: R::COLLECTION.to_string(),
            })
        }
    };
    let record = bson::from_document(doc)?;
    Ok(Stored { id, record })
}
