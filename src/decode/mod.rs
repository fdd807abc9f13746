//! Validating decode layer
//!
//! Converts loosely typed JSON into immutable domain records. A record is
//! either fully valid or entirely absent; there is no partially decoded
//! state. The two validators here are used by every endpoint:
//!
//! - [`expect_one`]: an entity lookup must yield exactly one record
//! - [`expect_many`]: a collection decodes all-or-nothing

mod field;

pub use field::{Field, JsonView, WIRE_DATE_FORMAT};

use serde_json::Value;

use crate::error::{QueryError, Result};

/// Total conversion of one JSON object into one domain record.
pub trait FromJson: Sized {
    /// Decode a record from an object view; any missing or ill-typed
    /// required field, or any nested-record failure, fails the whole record.
    fn from_json(json: &JsonView<'_>) -> Result<Self>;
}

/// Decode every element of `data`; if any single element fails, the whole
/// batch fails. A caller never receives a list with silently dropped entries.
pub fn expect_many<T: FromJson>(data: &[Value]) -> Result<Vec<T>> {
    data.iter()
        .map(|value| {
            let view = JsonView::of(value)
                .ok_or_else(|| QueryError::model("expected a json object"))?;
            T::from_json(&view)
        })
        .collect()
}

/// Decode exactly one record from `data`. Zero matches report the requested
/// id as missing; more than one is a model violation.
pub fn expect_one<T: FromJson>(id: &str, data: &[Value]) -> Result<T> {
    match data {
        [] => Err(QueryError::no_entity(id)),
        [value] => {
            let view = JsonView::of(value)
                .ok_or_else(|| QueryError::model("expected a json object"))?;
            T::from_json(&view)
        }
        _ => Err(QueryError::model("expected one only")),
    }
}
