//! Decoding of the lap record document.

use serde_json::Value;
use tracing::warn;

use crate::domain::errors::LoadError;
use crate::domain::lap::LapRecord;

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes a JSON document into lap records.
///
/// The document must be an array. Elements that are not objects are kept as
/// records with every field absent, so one bad entry never rejects the file.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<LapRecord>, LoadError> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::InvalidJson {
        reason: e.to_string(),
    })?;

    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(LoadError::NotAnArray {
                found: kind_of(&other),
            });
        }
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            LapRecord::from_json(item).unwrap_or_else(|| {
                warn!(
                    "Entry {} is a {}, not an object; keeping it with no fields",
                    index,
                    kind_of(item)
                );
                LapRecord::default()
            })
        })
        .collect();

    Ok(records)
}
