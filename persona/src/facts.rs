//! Structured biographical facts about the persona.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::prompt_builder::BuildError;

/// Key holding the persona's full display name.
pub const FULL_NAME: &str = "full_name";
/// Key holding the short name the persona goes by.
pub const NAME: &str = "name";

/// Field name to value mapping, kept in insertion order.
///
/// Only [`FULL_NAME`] and [`NAME`] carry meaning for prompt rendering; every
/// other attribute is passed through as text.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Facts(Map<String, Value>);

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse facts from a JSON document whose top level is an object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// String value of a field the prompt cannot do without.
    ///
    /// Absent, non-string and blank values are all reported as
    /// [`BuildError::MissingContextField`].
    pub fn require(&self, field: &'static str) -> Result<&str, BuildError> {
        match self.0.get(field) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
            _ => Err(BuildError::MissingContextField { field }),
        }
    }

    pub fn full_name(&self) -> Result<&str, BuildError> {
        self.require(FULL_NAME)
    }

    pub fn name(&self) -> Result<&str, BuildError> {
        self.require(NAME)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Facts {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        )
    }
}

/// Pretty-printed JSON, keys in insertion order.
impl fmt::Display for Facts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
