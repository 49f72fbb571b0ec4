//! MongoDB-backed document store.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::ClientOptions,
    Client, Database,
};
use std::time::Duration;

use super::{DocumentStore, ReplaceOutcome, StoreError, StoreResult};
use crate::config::DatabaseConfig;

/// Database used when neither the URI nor the config names one.
const FALLBACK_DATABASE: &str = "cinema";

/// A `DocumentStore` talking to a MongoDB deployment.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connect and verify the deployment answers a `ping`.
    ///
    /// The driver connects lazily, so the ping is what turns an unreachable
    /// server into a startup error.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        let timeout = Duration::from_secs(config.connect_timeout_secs);
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::Connect(e.to_string()))?;

        let db = match &config.name {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(FALLBACK_DATABASE)),
        };

        let store = Self { client, db };
        store
            .ping()
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        tracing::info!(database = %store.db.name(), "Connected to MongoDB");
        Ok(store)
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, collection: &str, mut doc: Document) -> StoreResult<ObjectId> {
        doc.remove("_id");
        let result = self.collection(collection).insert_one(doc).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::MissingId {
                collection: collection.to_string(),
            })
    }

    async fn replace(
        &self,
        collection: &str,
        id: ObjectId,
        mut doc: Document,
    ) -> StoreResult<ReplaceOutcome> {
        doc.remove("_id");
        let result = self
            .collection(collection)
            .replace_one(doc! { "_id": id }, doc)
            .await?;
        Ok(ReplaceOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, collection: &str, id: ObjectId) -> StoreResult<u64> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id })
            .await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}
