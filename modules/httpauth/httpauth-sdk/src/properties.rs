//! Typed extraction of plugin settings from flat host properties.
//!
//! `http-groupprovider.endpoint = http://...` becomes field `endpoint` of the
//! group plugin config when extracted with prefix `http-groupprovider`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Deserialize every `<prefix>.<key>` entry into `T`.
///
/// Entries with another prefix are ignored.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if the selected entries do not fit `T`
/// (missing required key, unknown key, unparsable value).
pub fn extract<T: DeserializeOwned>(
    properties: &HashMap<String, String>,
    prefix: &str,
) -> Result<T, ConfigError> {
    let selected: Map<String, Value> = properties
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('.'))
                .map(|field| (field.to_owned(), Value::String(value.clone())))
        })
        .collect();

    serde_json::from_value(Value::Object(selected)).map_err(|e| ConfigError::Invalid {
        prefix: prefix.to_owned(),
        reason: e.to_string(),
    })
}
