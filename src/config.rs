//! Key/value configuration backed by a JSON object.

use crate::error::{Error, Result};
use crate::fsio;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Default indentation for saved config files.
pub const CONFIG_INDENT: usize = 2;

/// String keys mapped to arbitrary JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    values: Map<String, Value>,
}

impl From<Map<String, Value>> for Config {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl Config {
    /// An empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` for a read-modify-write cycle.
    ///
    /// A missing file yields an empty config. Anything else that is not a JSON
    /// object is an error, so the caller never overwrites content it could not read.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file exists but cannot be read,
    /// [`Error::Json`] if it is malformed, and [`Error::InvalidArgument`] if it
    /// holds a JSON value other than an object.
    pub fn open(path: &Path) -> Result<Self> {
        match fsio::try_read_json_file(path) {
            Ok(Value::Object(map)) => Ok(Self::from(map)),
            Ok(other) => Err(Error::InvalidArgument(format!(
                "config {} is not a JSON object (found {})",
                path.display(),
                json_kind(&other)
            ))),
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::new())
            }
            Err(err) => Err(err),
        }
    }

    /// The value under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The value under `key`, or `default` when absent.
    #[must_use]
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.values.get(key).cloned().unwrap_or(default)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// All entries.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Merge the JSON object in `path` over the current values.
    ///
    /// Returns `false` (leaving the config untouched) when the file is
    /// missing, malformed, not an object, or an empty object.
    pub fn load_from_file(&mut self, path: &Path) -> bool {
        match fsio::read_json_file(path) {
            Some(Value::Object(map)) if !map.is_empty() => {
                self.values.extend(map);
                true
            }
            Some(Value::Object(_)) => false,
            Some(other) => {
                warn!(
                    "config {} is not a JSON object (found {})",
                    path.display(),
                    json_kind(&other)
                );
                false
            }
            None => false,
        }
    }

    /// Write every entry to `path` as pretty JSON; returns whether it succeeded.
    #[must_use]
    pub fn save_to_file(&self, path: &Path) -> bool {
        fsio::write_json_file(&self.values, path, CONFIG_INDENT)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
