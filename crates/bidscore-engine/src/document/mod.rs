//! Typed access to open-ended JSON documents.
//!
//! Proposal and criteria documents are free-form objects. Scorers read them
//! through [`Document`], whose lookups distinguish a missing field from a field
//! of the wrong shape, so a bonus rule can skip bad input without failing.


use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of looking up a typed field in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<T> {
    /// The key is not present.
    Absent,
    /// The key is present but holds a value of another shape.
    WrongType,
    /// The key is present with the requested shape.
    Present(T),
}

impl<T> Lookup<T> {
    /// Returns the value when present with the right shape.
    pub fn present(self) -> Option<T> {
        match self {
            Lookup::Present(value) => Some(value),
            Lookup::Absent | Lookup::WrongType => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_wrong_type(&self) -> bool {
        matches!(self, Lookup::WrongType)
    }

    /// Returns `true` when present and `predicate` holds.
    pub fn is_present_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        self.present().is_some_and(predicate)
    }
}

/// An open-ended JSON object (field name to arbitrary value).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access to a field, regardless of shape.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn lookup<'a, T>(&'a self, key: &str, extract: impl FnOnce(&'a Value) -> Option<T>) -> Lookup<T> {
        match self.0.get(key) {
            None => Lookup::Absent,
            Some(value) => extract(value).map_or(Lookup::WrongType, Lookup::Present),
        }
    }

    /// Looks up a JSON number. Numeric-looking strings are the wrong type.
    pub fn number(&self, key: &str) -> Lookup<f64> {
        self.lookup(key, Value::as_f64)
    }

    /// Looks up a JSON array.
    pub fn list(&self, key: &str) -> Lookup<&[Value]> {
        self.lookup(key, |value| value.as_array().map(Vec::as_slice))
    }

    pub fn string(&self, key: &str) -> Lookup<&str> {
        self.lookup(key, Value::as_str)
    }

    pub fn object(&self, key: &str) -> Lookup<&Map<String, Value>> {
        self.lookup(key, Value::as_object)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets a field, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Document {
    type Error = Value;

    /// Accepts JSON objects; returns any other value unchanged as the error.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
