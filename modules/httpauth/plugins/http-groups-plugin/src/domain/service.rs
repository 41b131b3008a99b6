//! Service implementation for the HTTP group resolver.

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Uri};
use httpauth_sdk::{ConfigError, GroupSet};
use httpauth_transport::{HttpClient, decode_object, parse_endpoint};

use super::error::DomainError;
use super::wire::{GroupRequest, GroupResponse};
use crate::config::HttpGroupsPluginConfig;
use crate::module::PLUGIN_NAME;

/// HTTP group resolver service.
#[derive(Debug, Clone)]
pub struct Service {
    endpoint: Uri,
    http: HttpClient,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the endpoint is unusable or the HTTP client
    /// cannot be built.
    pub fn from_config(cfg: &HttpGroupsPluginConfig) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(&cfg.endpoint).map_err(|e| ConfigError::Invalid {
            prefix: PLUGIN_NAME.to_owned(),
            reason: format!("endpoint: {e}"),
        })?;

        let mut builder = HttpClient::builder();
        if let Some(timeout) = cfg.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = cfg.request_timeout {
            builder = builder.request_timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::Transport(e.to_string()))?;

        Ok(Self::new(endpoint, http))
    }

    #[must_use]
    pub fn new(endpoint: Uri, http: HttpClient) -> Self {
        Self { endpoint, http }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Ask the group service for the groups of `username`.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] for transport faults, non-2xx statuses and
    /// bodies that are not `{"groups": [<string>...]}`.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn resolve_groups(&self, username: &str) -> Result<GroupSet, DomainError> {
        let body =
            serde_json::to_vec(&GroupRequest::new(username)).map_err(DomainError::Encode)?;

        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = self
            .http
            .post(&self.endpoint, headers, Bytes::from(body))
            .await?;

        if !response.status.is_success() {
            return Err(DomainError::Status(response.status));
        }

        let groups: GroupSet = decode_object::<GroupResponse>(&response.body)?.into();
        tracing::debug!(username, group_count = groups.len(), "groups resolved");
        Ok(groups)
    }
}
