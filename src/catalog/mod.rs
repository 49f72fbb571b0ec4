//! Typed catalog records.
//!
//! # Data Flow
//! ```text
//! JSON body → ActorInput / MovieInput (validated)
//!     → Actor / Movie (known field set only)
//!     → Repository<R> → BSON document → DocumentStore
//!
//! DocumentStore → BSON document → Stored<R> → ActorView / MovieView → JSON
//! ```

pub mod actor;
pub mod lenient;
pub mod movie;
pub mod repository;

use mongodb::bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

pub use actor::{Actor, ActorInput, ActorView};
pub use movie::{Movie, MovieInput, MovieView};
pub use repository::{Repository, Stored};

/// A record type persisted in its own collection.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection the records live in.
    const COLLECTION: &'static str;

    /// Human-readable singular name, used in messages ("Actor not found").
    const LABEL: &'static str;

    /// Request body accepted on create and update.
    type Input: Validate + DeserializeOwned + Send + 'static;

    /// Response shape for a stored record.
    type View: Serialize + Send + 'static;

    /// Build the record from a validated input, dropping unknown fields.
    fn from_input(input: Self::Input) -> Self;

    fn into_view(id: ObjectId, record: Self) -> Self::View;
}
