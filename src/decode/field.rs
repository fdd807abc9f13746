//! Typed field access into loosely typed JSON
//!
//! Every decode function in the model layer goes through [`JsonView`]: a
//! borrowed view over one JSON object with per-key accessors that report
//! present/absent/invalid without ever panicking. Required-field and
//! optional-field policies are applied uniformly by [`Field`].

use base64::Engine;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{QueryError, Result};
use crate::types::JsonObject;

/// The fixed wire date format: `yyyy-MM-dd'T'HH:mm:ss.SSSZ`.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Outcome of looking up one typed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Key present with the expected underlying type
    Present(T),
    /// Key missing from the object
    Absent,
    /// Key present but with the wrong underlying type, or an unparseable
    /// date/base64 payload
    Invalid,
}

impl<T> Field<T> {
    /// Required-field policy: absent or ill-typed fails the record.
    pub fn required(self, name: &str) -> Result<T> {
        match self {
            Field::Present(value) => Ok(value),
            Field::Absent => Err(QueryError::model(format!(
                "missing required field '{name}'"
            ))),
            Field::Invalid => Err(QueryError::model(format!("ill-typed field '{name}'"))),
        }
    }

    /// Optional-field policy: absent or ill-typed reads as `None`.
    pub fn optional(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Invalid => None,
        }
    }

    /// Check whether the field is present
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }
}

/// A borrowed view over one JSON object.
#[derive(Debug, Clone, Copy)]
pub struct JsonView<'a> {
    dict: &'a JsonObject,
}

impl<'a> JsonView<'a> {
    /// Wrap a JSON object
    pub fn new(dict: &'a JsonObject) -> Self {
        Self { dict }
    }

    /// View a JSON value, if it is an object
    pub fn of(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.dict.get(name)
    }

    /// Look up a string field
    pub fn string(&self, name: &str) -> Field<String> {
        match self.get(name) {
            None => Field::Absent,
            Some(Value::String(s)) => Field::Present(s.clone()),
            Some(_) => Field::Invalid,
        }
    }

    /// Look up a boolean field
    pub fn boolean(&self, name: &str) -> Field<bool> {
        match self.get(name) {
            None => Field::Absent,
            Some(Value::Bool(b)) => Field::Present(*b),
            Some(_) => Field::Invalid,
        }
    }

    /// Look up an unsigned 64-bit height/counter field
    pub fn uint64(&self, name: &str) -> Field<u64> {
        match self.get(name) {
            None => Field::Absent,
            Some(value) => match value.as_u64() {
                Some(n) => Field::Present(n),
                None => Field::Invalid,
            },
        }
    }

    /// Look up an unsigned 8-bit field (e.g. denomination decimals)
    pub fn uint8(&self, name: &str) -> Field<u8> {
        match self.uint64(name) {
            Field::Present(n) => match u8::try_from(n) {
                Ok(n) => Field::Present(n),
                Err(_) => Field::Invalid,
            },
            Field::Absent => Field::Absent,
            Field::Invalid => Field::Invalid,
        }
    }

    /// Look up a date field in the fixed wire format
    pub fn date(&self, name: &str) -> Field<DateTime<Utc>> {
        match self.string(name) {
            Field::Present(s) => match DateTime::parse_from_str(&s, WIRE_DATE_FORMAT) {
                Ok(date) => Field::Present(date.with_timezone(&Utc)),
                Err(_) => Field::Invalid,
            },
            Field::Absent => Field::Absent,
            Field::Invalid => Field::Invalid,
        }
    }

    /// Look up a base64-encoded bytes field
    pub fn bytes(&self, name: &str) -> Field<Vec<u8>> {
        match self.string(name) {
            Field::Present(s) => match base64::engine::general_purpose::STANDARD.decode(s) {
                Ok(bytes) => Field::Present(bytes),
                Err(_) => Field::Invalid,
            },
            Field::Absent => Field::Absent,
            Field::Invalid => Field::Invalid,
        }
    }

    /// Look up a nested object field
    pub fn object(&self, name: &str) -> Field<JsonView<'a>> {
        match self.get(name) {
            None => Field::Absent,
            Some(Value::Object(dict)) => Field::Present(JsonView::new(dict)),
            Some(_) => Field::Invalid,
        }
    }

    /// Look up an array field
    pub fn array(&self, name: &str) -> Field<&'a [Value]> {
        match self.get(name) {
            None => Field::Absent,
            Some(Value::Array(items)) => Field::Present(items.as_slice()),
            Some(_) => Field::Invalid,
        }
    }

    /// Look up an array of strings
    pub fn string_array(&self, name: &str) -> Field<Vec<String>> {
        match self.array(name) {
            Field::Present(items) => {
                let mut strings = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(s) => strings.push(s.to_string()),
                        None => return Field::Invalid,
                    }
                }
                Field::Present(strings)
            }
            Field::Absent => Field::Absent,
            Field::Invalid => Field::Invalid,
        }
    }
}
