//! Tolerant decoding of stored fields.
//!
//! Collections may hold documents written by other clients with loosely
//! typed values, such as a float `age` or a `rating` stored as a string.
//! Values are coerced where the meaning is unambiguous and dropped otherwise,
//! so a single odd document never fails a read.

use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer};

/// A field type that can be recovered from an arbitrary BSON value.
pub trait Coerce: Sized {
    fn coerce(value: Bson) -> Option<Self>;
}

impl Coerce for i32 {
    fn coerce(value: Bson) -> Option<Self> {
        match value {
            Bson::Int32(v) => Some(v),
            Bson::Int64(v) => i32::try_from(v).ok(),
            Bson::Double(v) if v.is_finite() && v.abs() <= f64::from(i32::MAX) => {
                Some(v.round() as i32)
            }
            Bson::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Coerce for f64 {
    fn coerce(value: Bson) -> Option<Self> {
        match value {
            Bson::Double(v) => Some(v),
            Bson::Int32(v) => Some(f64::from(v)),
            Bson::Int64(v) => Some(v as f64),
            Bson::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Coerce for String {
    fn coerce(value: Bson) -> Option<Self> {
        match value {
            Bson::String(s) => Some(s),
            Bson::Int32(v) => Some(v.to_string()),
            Bson::Int64(v) => Some(v.to_string()),
            Bson::Double(v) => Some(v.to_string()),
            Bson::Boolean(v) => Some(v.to_string()),
            _ => None,
        }
    }
}

impl Coerce for Vec<String> {
    fn coerce(value: Bson) -> Option<Self> {
        match value {
            Bson::Array(items) => Some(items.into_iter().filter_map(String::coerce).collect()),
            Bson::String(s) => Some(vec![s]),
            _ => None,
        }
    }
}

/// `deserialize_with` for optional fields.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Coerce,
{
    Ok(Option::<Bson>::deserialize(deserializer)?.and_then(T::coerce))
}

/// `deserialize_with` for the required text field; unusable values become "".
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(option::<D, String>(deserializer)?.unwrap_or_default())
}
