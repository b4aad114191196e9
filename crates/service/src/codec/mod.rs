//! Wire codec for entities whose JSON shape does not follow their Rust shape.
//!
//! Pets and visits carry dates in the fixed `yyyy/MM/dd` form and flatten
//! their references (`petId`, `ownerId`), so they implement [`EntityCodec`]
//! by hand instead of deriving serde impls. Each entity type registers its
//! codec once through its trait impl; `Vec<T>` maps to a JSON array.

use serde_json::Value;
use thiserror::Error;

pub mod fields;
mod pet;
mod visit;

pub use fields::{DateParseError, DATE_PATTERN};

/// Failure to turn a JSON document into an entity.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object")]
    NotAnObject,
    #[error("expected a JSON array")]
    NotAnArray,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    InvalidType { field: &'static str, expected: &'static str },
    #[error("field `{field}` has invalid date {value:?}: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: DateParseError,
    },
}

/// Decode/encode between raw JSON and a typed entity.
pub trait EntityCodec: Sized {
    fn decode(value: &Value) -> Result<Self, DecodeError>;
    fn encode(&self) -> Value;
}

impl<T: EntityCodec> EntityCodec for Vec<T> {
    fn decode(value: &Value) -> Result<Self, DecodeError> {
        value.as_array().ok_or(DecodeError::NotAnArray)?.iter().map(T::decode).collect()
    }

    fn encode(&self) -> Value {
        Value::Array(self.iter().map(EntityCodec::encode).collect())
    }
}

/// Parse a request body and decode it.
pub fn from_slice<T: EntityCodec>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    T::decode(&value)
}

pub fn from_str<T: EntityCodec>(text: &str) -> Result<T, DecodeError> {
    from_slice(text.as_bytes())
}
