//! Tagged configuration values
//!
//! Desired tool sections are described with a closed set of value shapes
//! so the merger can detect structural conflicts by comparing tags.

use toml_edit::{Array, InlineTable, Value};

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

/// A configuration value: a scalar, an ordered sequence or an ordered mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(Scalar),
    Sequence(Vec<ConfigValue>),
    Mapping(Mapping),
}

/// An insertion-ordered string-keyed mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(String, ConfigValue)>,
}

/// The canonical keys a tool should have in its section.
pub type DesiredSection = Mapping;

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Mapping::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a key, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (k, v) in iter {
            mapping.insert(k, v);
        }
        mapping
    }
}

impl ConfigValue {
    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Scalar(Scalar::String(_)) => "string",
            ConfigValue::Scalar(Scalar::Integer(_)) => "integer",
            ConfigValue::Scalar(Scalar::Float(_)) => "float",
            ConfigValue::Scalar(Scalar::Boolean(_)) => "boolean",
            ConfigValue::Sequence(_) => "array",
            ConfigValue::Mapping(_) => "table",
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }

    /// Convert to a `toml_edit` value. Mappings become inline tables.
    pub fn to_toml_value(&self) -> Value {
        match self {
            ConfigValue::Scalar(Scalar::String(s)) => Value::from(s.as_str()),
            ConfigValue::Scalar(Scalar::Integer(i)) => Value::from(*i),
            ConfigValue::Scalar(Scalar::Float(f)) => Value::from(*f),
            ConfigValue::Scalar(Scalar::Boolean(b)) => Value::from(*b),
            ConfigValue::Sequence(items) => {
                let mut array = Array::new();
                for item in items {
                    array.push(item.to_toml_value());
                }
                Value::Array(array)
            }
            ConfigValue::Mapping(mapping) => {
                let mut table = InlineTable::new();
                for (key, value) in mapping.iter() {
                    table.insert(key, value.to_toml_value());
                }
                Value::InlineTable(table)
            }
        }
    }

    /// Convert from a parsed `toml_edit` value. Datetimes are kept as text.
    pub fn from_toml_value(value: &Value) -> Self {
        match value {
            Value::String(s) => s.value().as_str().into(),
            Value::Integer(i) => (*i.value()).into(),
            Value::Float(f) => (*f.value()).into(),
            Value::Boolean(b) => (*b.value()).into(),
            Value::Datetime(d) => d.value().to_string().into(),
            Value::Array(array) => {
                ConfigValue::Sequence(array.iter().map(ConfigValue::from_toml_value).collect())
            }
            Value::InlineTable(table) => ConfigValue::Mapping(
                table
                    .iter()
                    .map(|(k, v)| (k.to_string(), ConfigValue::from_toml_value(v)))
                    .collect(),
            ),
        }
    }

    /// Parse a command-line literal.
    ///
    /// Anything that is a valid TOML value (`88`, `true`, `["E", "F"]`,
    /// `"quoted"`) is taken as such; everything else is a plain string.
    pub fn parse_literal(input: &str) -> Self {
        match input.trim().parse::<Value>() {
            Ok(value) => ConfigValue::from_toml_value(&value),
            Err(_) => ConfigValue::from(input),
        }
    }

    /// Whether an existing document value already equals this one.
    ///
    /// Formatting is ignored; only the data is compared.
    pub fn matches(&self, existing: &Value) -> bool {
        match (self, existing) {
            (ConfigValue::Scalar(Scalar::String(d)), Value::String(s)) => s.value() == d,
            (ConfigValue::Scalar(Scalar::Integer(d)), Value::Integer(i)) => i.value() == d,
            (ConfigValue::Scalar(Scalar::Float(d)), Value::Float(f)) => f.value() == d,
            (ConfigValue::Scalar(Scalar::Boolean(d)), Value::Boolean(b)) => b.value() == d,
            (ConfigValue::Sequence(items), Value::Array(array)) => {
                items.len() == array.len()
                    && items.iter().zip(array.iter()).all(|(d, e)| d.matches(e))
            }
            (ConfigValue::Mapping(mapping), Value::InlineTable(table)) => {
                mapping.len() == table.len()
                    && mapping
                        .iter()
                        .all(|(k, d)| table.get(k).is_some_and(|e| d.matches(e)))
            }
            _ => false,
        }
    }

    /// Compact single-line rendering, as it would appear after `=`.
    pub fn render(&self) -> String {
        self.to_toml_value().to_string().trim().to_string()
    }
}

impl From<Scalar> for ConfigValue {
    fn from(s: Scalar) -> Self {
        ConfigValue::Scalar(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Scalar(Scalar::String(s))
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Scalar(Scalar::Integer(i))
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Scalar(Scalar::Integer(i64::from(i)))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Scalar(Scalar::Float(f))
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Scalar(Scalar::Boolean(b))
    }
}

impl From<Mapping> for ConfigValue {
    fn from(m: Mapping) -> Self {
        ConfigValue::Mapping(m)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>, const N: usize> From<[T; N]> for ConfigValue {
    fn from(items: [T; N]) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}
