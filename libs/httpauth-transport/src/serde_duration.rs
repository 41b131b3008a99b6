//! Optional human-readable durations (`"750ms"`, `"5s"`, `"1m"`) in config.
//!
//! Use with `#[serde(default, with = "httpauth_transport::serde_duration")]`
//! on an `Option<Duration>` field.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize an optional humantime duration. An empty string is `None`.
///
/// # Errors
///
/// Fails if the string is not a valid humantime duration.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => humantime::parse_duration(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Serialize an optional duration in humantime form.
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::ref_option)]
pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_str(&humantime::format_duration(*d).to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct Timeouts {
        #[serde(with = "crate::serde_duration")]
        timeout: Option<Duration>,
    }

    #[test]
    fn parses_humantime_values() {
        let t: Timeouts = serde_json::from_str(r#"{"timeout":"750ms"}"#).unwrap();
        assert_eq!(t.timeout, Some(Duration::from_millis(750)));
    }

    #[test]
    fn missing_and_empty_are_none() {
        let t: Timeouts = serde_json::from_str("{}").unwrap();
        assert_eq!(t.timeout, None);
        let t: Timeouts = serde_json::from_str(r#"{"timeout":""}"#).unwrap();
        assert_eq!(t.timeout, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Timeouts>(r#"{"timeout":"soon"}"#).is_err());
    }

    #[test]
    fn serializes_back_to_humantime() {
        let t = Timeouts {
            timeout: Some(Duration::from_secs(5)),
        };
        assert_eq!(serde_json::to_string(&t).unwrap(), r#"{"timeout":"5s"}"#);
    }
}
