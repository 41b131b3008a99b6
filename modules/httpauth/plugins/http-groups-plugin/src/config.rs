//! Configuration for the HTTP group resolver plugin.

use std::time::Duration;

use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpGroupsPluginConfig {
    /// Group service endpoint.
    pub endpoint: String,

    #[serde(default, with = "httpauth_transport::serde_duration")]
    pub connect_timeout: Option<Duration>,

    #[serde(default, with = "httpauth_transport::serde_duration")]
    pub request_timeout: Option<Duration>,
}

impl HttpGroupsPluginConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}
