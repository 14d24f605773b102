use indexmap::IndexMap;
use serde::Deserialize;

/// One value inside a configuration tier: a string, a flag, a number, or a
/// nested mapping (used by `volumes`, `envvars`, and `buildargs`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(IndexMap<String, ConfigValue>),
}

/// A single named configuration layer. Insertion order is significant and
/// survives merging.
pub type Tier = IndexMap<String, ConfigValue>;

impl ConfigValue {
    /// Truthiness used for override filtering and flag fields:
    /// `false`, `0`, `0.0`, `""`, and the empty mapping are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Map(m) => !m.is_empty(),
        }
    }

    /// Read this value as a string field. Numbers are formatted; flags and
    /// mappings have no string form.
    pub fn as_str_field(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(_) | Self::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, ConfigValue>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<IndexMap<String, ConfigValue>> for ConfigValue {
    fn from(value: IndexMap<String, ConfigValue>) -> Self {
        Self::Map(value)
    }
}
