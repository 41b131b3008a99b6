//! Strict JSON object decoding.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// Decode a response body that must be a JSON object into `T`.
///
/// Derived `Deserialize` impls also accept JSON arrays positionally, so the
/// body is first checked to be an object. Unknown fields are left to `T`
/// (ignored unless `T` denies them); missing required fields fail.
///
/// # Errors
///
/// - [`DecodeError::Syntax`] if the body is not JSON at all
/// - [`DecodeError::NotAnObject`] if the top-level value is not an object
/// - [`DecodeError::Shape`] if the object does not fit `T`
pub fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(body).map_err(DecodeError::Syntax)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject(kind(&value)));
    }
    serde_json::from_value(value).map_err(DecodeError::Shape)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
