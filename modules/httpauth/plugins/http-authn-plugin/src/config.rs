//! Configuration for the HTTP credential validator plugin.

use std::time::Duration;

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpAuthNPluginConfig {
    /// Authentication endpoint receiving the forwarded challenge.
    pub endpoint: String,

    /// TCP connect timeout. Transport default when unset.
    #[serde(default, with = "httpauth_transport::serde_duration")]
    pub connect_timeout: Option<Duration>,

    /// Whole round-trip timeout. Transport default when unset.
    #[serde(default, with = "httpauth_transport::serde_duration")]
    pub request_timeout: Option<Duration>,
}

impl HttpAuthNPluginConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}
