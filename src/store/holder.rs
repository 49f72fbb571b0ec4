//! Store connection holder.
//!
//! Owns the single shared store handle. The holder is built explicitly at
//! startup and handed to the HTTP layer through `AppState`; there is no
//! process-global connection.

use std::sync::Arc;
use tokio::sync::OnceCell;

use super::{DocumentStore, MemoryStore, MongoStore, StoreError, StoreResult};
use crate::config::{DatabaseConfig, StoreBackend};

/// Lazily initialized, shared handle to a `DocumentStore`.
pub struct StoreHolder {
    config: DatabaseConfig,
    store: OnceCell<Arc<dyn DocumentStore>>,
}

impl StoreHolder {
    /// Create an uninitialized holder. Call [`StoreHolder::init`] before use.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            store: OnceCell::new(),
        }
    }

    /// Create a holder that is already initialized with `store`. The
    /// connection settings are never consulted.
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: DatabaseConfig::default(),
            store: OnceCell::new_with(Some(store)),
        }
    }

    /// Establish the connection. Idempotent: once a store is up, later calls
    /// return it without reconnecting, and concurrent callers share a single
    /// attempt. A failed attempt leaves the holder uninitialized.
    pub async fn init(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        let store = self
            .store
            .get_or_try_init(|| async {
                tracing::info!(backend = ?self.config.backend, "Initializing document store");
                let store: Arc<dyn DocumentStore> = match self.config.backend {
                    StoreBackend::Mongodb => Arc::new(MongoStore::connect(&self.config).await?),
                    StoreBackend::Memory => Arc::new(MemoryStore::new()),
                };
                Ok::<_, StoreError>(store)
            })
            .await?;
        Ok(Arc::clone(store))
    }

    /// The live store handle.
    pub fn get(&self) -> StoreResult<Arc<dyn DocumentStore>> {
        self.store.get().cloned().ok_or(StoreError::Uninitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    /// Shut the underlying client down. No-op when never initialized.
    pub async fn close(&self) {
        if let Some(store) = self.store.get() {
            tracing::info!(backend = store.backend(), "Closing document store");
            store.shutdown().await;
        }
    }
}

impl std::fmt::Debug for StoreHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.store.get() {
            Some(store) => f
                .debug_struct("StoreHolder")
                .field("backend", &store.backend())
                .field("initialized", &true)
                .finish(),
            None => f
                .debug_struct("StoreHolder")
                .field("backend", &self.config.backend)
                .field("initialized", &false)
                .finish(),
        }
    }
}
