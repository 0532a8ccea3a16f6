//! Typed self-descriptions exchanged at the serialization boundary.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{ErrorInfo, ScanError};

/// Declarative description of a generator, excluder, mutator or region.
///
/// A record is a flat JSON object with a `typeid` discriminator plus
/// type-specific fields; records nest recursively (a compound scan embeds the
/// records of its parts). The discriminator is resolved against a registry
/// owned by the serialization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedRecord {
    /// Type discriminator, e.g. `scan:generator/line:1.0`.
    pub typeid: String,
    /// Type-specific fields, flattened beside the discriminator.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TypedRecord {
    /// Builds a record from a serializable payload struct.
    ///
    /// The payload must serialize to a JSON object; its fields are flattened
    /// beside the discriminator.
    pub fn from_payload<T: Serialize>(typeid: &str, payload: &T) -> Result<Self, ScanError> {
        let value = serde_json::to_value(payload).map_err(|err| {
            ScanError::Serde(
                ErrorInfo::new("record-serialize", err.to_string())
                    .with_context("typeid", typeid),
            )
        })?;
        match value {
            Value::Object(fields) => Ok(Self {
                typeid: typeid.to_string(),
                fields,
            }),
            other => Err(ScanError::Serde(
                ErrorInfo::new("record-not-object", "record payloads must be JSON objects")
                    .with_context("typeid", typeid)
                    .with_context("found", json_kind(&other)),
            )),
        }
    }

    /// Parses the record's fields back into a payload struct.
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, ScanError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|err| {
            ScanError::Serde(
                ErrorInfo::new("record-deserialize", err.to_string())
                    .with_context("typeid", self.typeid.clone()),
            )
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
