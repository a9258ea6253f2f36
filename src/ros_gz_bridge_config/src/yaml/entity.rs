//! YAML entity abstraction

use crate::error::EntryError;
use serde_yaml::{Mapping, Value};
use std::str::FromStr;

type Result<T> = std::result::Result<T, EntryError>;

/// Read-only view over a map-shaped configuration node
pub trait Entity {
    /// Whether the key is present at all, even with a null value
    fn has(&self, name: &str) -> bool;

    /// Get a scalar field as text
    fn get_attr_str(&self, name: &str) -> Result<Option<String>>;
}

/// Extension trait for type-aware field access
pub trait EntityExt: Entity {
    /// Get field value with type coercion
    fn get_attr<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        match self.get_attr_str(name)? {
            Some(value) => {
                let parsed = value.parse::<T>().map_err(|_| EntryError::TypeCoercion {
                    field: name.to_string(),
                    value: value.to_string(),
                    expected_type: std::any::type_name::<T>(),
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Get a boolean field, accepting the YAML 1.1 spellings
    fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        match self.get_attr_str(name)? {
            Some(value) => parse_yaml_bool(&value)
                .map(Some)
                .ok_or_else(|| EntryError::TypeCoercion {
                    field: name.to_string(),
                    value,
                    expected_type: "bool",
                }),
            None => Ok(None),
        }
    }
}

// Blanket implementation for all Entity types
impl<T: Entity + ?Sized> EntityExt for T {}

/// Parse a boolean the way YAML 1.1 loaders do.
///
/// serde_yaml follows YAML 1.2, so `yes`/`on` arrive here as strings.
pub(crate) fn parse_yaml_bool(value: &str) -> Option<bool> {
    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "y" | "Y" | "on" | "On" | "ON" => {
            Some(true)
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "n" | "N" | "off" | "Off" | "OFF" => {
            Some(false)
        }
        _ => None,
    }
}

/// YAML entity implementation wrapping a serde_yaml mapping
pub struct YamlEntity<'a> {
    map: &'a Mapping,
}

impl<'a> YamlEntity<'a> {
    pub fn new(node: &'a Value) -> Result<Self> {
        node.as_mapping()
            .map(|map| Self { map })
            .ok_or(EntryError::NotAMap)
    }
}

impl Entity for YamlEntity<'_> {
    fn has(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    fn get_attr_str(&self, name: &str) -> Result<Option<String>> {
        let Some(value) = self.map.get(name) else {
            return Ok(None);
        };

        match value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(EntryError::TypeCoercion {
                field: name.to_string(),
                value: describe(other),
                expected_type: "scalar",
            }),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Sequence(_) => "<sequence>".to_string(),
        Value::Mapping(_) => "<map>".to_string(),
        Value::Tagged(tagged) => format!("{}", tagged.tag),
        scalar => format!("{:?}", scalar),
    }
}
