//! Actor records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{lenient, Resource};

/// An actor as stored in the `actors` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub movies: Option<Vec<String>>,
}

/// Request body for creating or replacing an actor.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ActorInput {
    #[validate(
        required(message = "Actor name is required"),
        length(min = 1, message = "Actor name is required")
    )]
    #[schema(required = true, example = "Tom Hanks")]
    pub name: Option<String>,
    #[schema(example = 65)]
    pub age: Option<i32>,
    #[schema(example = "USA")]
    pub country: Option<String>,
    #[schema(example = json!(["Forrest Gump", "Toy Story"]))]
    pub movies: Option<Vec<String>>,
}

/// An actor returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActorView {
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "Tom Hanks")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<String>>,
}

impl Resource for Actor {
    const COLLECTION: &'static str = "actors";
    const LABEL: &'static str = "Actor";

    type Input = ActorInput;
    type View = ActorView;

    fn from_input(input: ActorInput) -> Self {
        Self {
            name: input.name.unwrap_or_default(),
            age: input.age,
            country: input.country,
            movies: input.movies,
        }
    }

    fn into_view(id: ObjectId, record: Self) -> ActorView {
        ActorView {
            id: id.to_hex(),
            name: record.name,
            age: record.age,
            country: record.country,
            movies: record.movies,
        }
    }
}
