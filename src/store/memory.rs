//! In-process document store.
//!
//! Collections are created on first write. Documents within a collection are
//! kept ordered by ObjectId, which follows insertion order for ids generated
//! by this process.

use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::{oid::ObjectId, Document};
use std::collections::BTreeMap;

use super::{DocumentStore, ReplaceOutcome, StoreResult};

/// A `DocumentStore` backed by concurrent maps.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: DashMap<String, BTreeMap<ObjectId, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

fn with_id(mut doc: Document, id: ObjectId) -> Document {
    doc.remove("_id");
    let mut stored = Document::new();
    stored.insert("_id", id);
    for (key, value) in doc {
        stored.insert(key, value);
    }
    stored
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|c| c.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self
            .collections
            .get(collection)
            .and_then(|c| c.get(&id).cloned()))
    }

    async fn insert(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .insert(id, with_id(doc, id));
        Ok(id)
    }

    async fn replace(
        &self,
        collection: &str,
        id: ObjectId,
        doc: Document,
    ) -> StoreResult<ReplaceOutcome> {
        let Some(mut docs) = self.collections.get_mut(collection) else {
            return Ok(ReplaceOutcome::default());
        };
        let Some(existing) = docs.get_mut(&id) else {
            return Ok(ReplaceOutcome::default());
        };

        let replacement = with_id(doc, id);
        let modified = u64::from(*existing != replacement);
        *existing = replacement;
        Ok(ReplaceOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, collection: &str, id: ObjectId) -> StoreResult<u64> {
        let removed = self
            .collections
            .get_mut(collection)
            .and_then(|mut c| c.remove(&id));
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::debug!(collections = self.collections.len(), "Memory store closed");
    }
}
