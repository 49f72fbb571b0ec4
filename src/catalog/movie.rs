//! Movie records.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{lenient, Resource};

/// A movie as stored in the `movies` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub genre: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub director: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub actors: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub box_office: Option<String>,
}

/// Request body for creating or replacing a movie.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[validate(
        required(message = "Movie title is required"),
        length(min = 1, message = "Movie title is required")
    )]
    #[schema(required = true, example = "Inception")]
    pub title: Option<String>,
    #[schema(example = "Sci-Fi")]
    pub genre: Option<String>,
    #[schema(example = "Christopher Nolan")]
    pub director: Option<String>,
    #[schema(example = 2010)]
    pub release_year: Option<i32>,
    #[schema(example = 8.8)]
    pub rating: Option<f64>,
    #[schema(example = json!(["Leonardo DiCaprio", "Joseph Gordon-Levitt"]))]
    pub actors: Option<Vec<String>>,
    #[schema(example = "$829M")]
    pub box_office: Option<String>,
}

/// A movie returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    #[serde(rename = "_id")]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[schema(example = "Inception")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
}

impl Resource for Movie {
    const COLLECTION: &'static str = "movies";
    const LABEL: &'static str = "Movie";

    type Input = MovieInput;
    type View = MovieView;

    fn from_input(input: MovieInput) -> Self {
        Self {
            title: input.title.unwrap_or_default(),
            genre: input.genre,
            director: input.director,
            release_year: input.release_year,
            rating: input.rating,
            actors: input.actors,
            box_office: input.box_office,
        }
    }

    fn into_view(id: ObjectId, record: Self) -> MovieView {
        MovieView {
            id: id.to_hex(),
            title: record.title,
            genre: record.genre,
            director: record.director,
            release_year: record.release_year,
            rating: record.rating,
            actors: record.actors,
            box_office: record.box_office,
        }
    }
}
