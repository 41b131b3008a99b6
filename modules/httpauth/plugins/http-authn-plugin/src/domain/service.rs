//! Service implementation for the HTTP credential validator.

use bytes::Bytes;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, StatusCode, Uri};
use httpauth_sdk::{Challenge, ConfigError, Principal};
use httpauth_transport::{HttpClient, decode_object, parse_endpoint};

use super::error::DomainError;
use super::wire::{AuthResponse, REQUEST_BODY};
use crate::config::HttpAuthNPluginConfig;
use crate::module::PLUGIN_NAME;

const APPLICATION_JSON: &str = "application/json";

/// HTTP credential validator service.
///
/// Holds only the endpoint and the shared HTTP client; each call is one
/// independent round trip.
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
    pub fn from_config(cfg: &HttpAuthNPluginConfig) -> Result<Self, ConfigError> {
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

    /// Create a service over an existing client, sharing its connection pool.
    #[must_use]
    pub fn new(endpoint: Uri, http: HttpClient) -> Self {
        Self { endpoint, http }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    /// Forward the challenge to the authentication endpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] describing why no principal was resolved.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn authenticate(&self, challenge: &Challenge) -> Result<Principal, DomainError> {
        let mut authorization = HeaderValue::from_str(challenge.expose())
            .map_err(|_| DomainError::UnencodableChallenge)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let response = self
            .http
            .post(&self.endpoint, headers, Bytes::from_static(REQUEST_BODY))
            .await?;

        if response.status != StatusCode::OK {
            return Err(DomainError::Rejected(response.status));
        }

        let principal = decode_object::<AuthResponse>(&response.body)?
            .into_principal()
            .ok_or(DomainError::MissingPrincipal)?;

        tracing::debug!(principal = %principal, "challenge accepted");
        Ok(principal)
    }
}
