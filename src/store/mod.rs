//! Document store subsystem.
//!
//! # Data Flow
//! ```text
//! startup
//!     → holder.rs (StoreHolder::init, fail fast on connect error)
//!     → mongo.rs | memory.rs (concrete DocumentStore)
//!     → Arc<dyn DocumentStore> shared by every request
//!
//! shutdown
//!     → StoreHolder::close → DocumentStore::shutdown
//! ```
//!
//! # Design Decisions
//! - Stores speak raw BSON documents; typing happens in `catalog`
//! - One store call per operation, no cross-collection effects
//! - The driver owns connection pooling; no locking on our side

pub mod holder;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use thiserror::Error;

pub use holder::StoreHolder;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Errors raised by the document store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `get()` was called before `init()` completed.
    #[error("Database not initialized")]
    Uninitialized,

    /// The initial connection could not be established.
    #[error("Failed to connect to document store: {0}")]
    Connect(String),

    /// Any error reported by the MongoDB driver.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] mongodb::bson::de::Error),

    /// A stored document has no ObjectId under `_id`.
    #[error("Document in '{collection}' has no ObjectId")]
    MissingId { collection: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of a full-document replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// Documents matching the id filter (0 or 1).
    pub matched: u64,
    /// Documents actually changed (0 when the replacement was identical).
    pub modified: u64,
}

/// A schemaless store of documents grouped into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;

    /// Every document in `collection`, in store default order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// Insert `doc` and return the generated identifier. Any `_id` in `doc`
    /// is ignored.
    async fn insert(&self, collection: &str, doc: Document) -> StoreResult<ObjectId>;

    /// Replace the whole document stored under `id`.
    async fn replace(
        &self,
        collection: &str,
        id: ObjectId,
        doc: Document,
    ) -> StoreResult<ReplaceOutcome>;

    /// Delete by id, returning the number of documents removed.
    async fn delete(&self, collection: &str, id: ObjectId) -> StoreResult<u64>;

    /// Cheap round trip to confirm the store is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Release client resources. Called once at shutdown.
    async fn shutdown(&self);
}
