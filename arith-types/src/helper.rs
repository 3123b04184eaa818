use serde_json::Value;

use crate::errors::{DeserializationError, SerializationError};
use crate::types::Operation;

/// Encodes a sequence of operations as a JSON array of records exposing the
/// three defining fields `a`, `b` and `mode`.
pub fn operations_to_json(operations: &[Operation]) -> Result<String, SerializationError> {
    Ok(serde_json::to_string(operations)?)
}

/// Decodes a JSON array of operation records. Derived members such as
/// `result` or `symbol` are ignored and recomputed from the defining fields;
/// missing fields take their zero-equivalent defaults.
pub fn operations_from_json(json: &str) -> Result<Vec<Operation>, DeserializationError> {
    Ok(serde_json::from_str(json)?)
}

pub fn operation_to_json_value(operation: &Operation) -> Result<Value, SerializationError> {
    Ok(serde_json::to_value(operation)?)
}

pub fn json_value_to_operation(value: Value) -> Result<Operation, DeserializationError> {
    Ok(serde_json::from_value(value)?)
}
