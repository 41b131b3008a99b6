//! Error types for the transport layer.

use std::time::Duration;

use thiserror::Error;

/// Faults raised while performing a round trip.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The TLS client configuration could not be built.
    #[error("failed to initialise TLS: {0}")]
    Tls(#[source] rustls::Error),

    /// Connection refused, DNS failure, broken connection, protocol error.
    #[error("request failed: {0}")]
    Send(#[source] hyper_util::client::legacy::Error),

    /// The response body could not be read to completion.
    #[error("failed to read response body: {0}")]
    Body(#[source] hyper::Error),

    /// The configured request timeout elapsed.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// A response body that is not the expected JSON object.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("body is not a JSON object (found {0})")]
    NotAnObject(&'static str),

    #[error("body does not match the expected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// A configured endpoint that cannot be called.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("endpoint is empty")]
    Empty,

    #[error("endpoint is not a valid URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("unsupported endpoint scheme '{0}' (expected http or https)")]
    Scheme(String),

    #[error("endpoint has no host")]
    MissingHost,

    #[error("endpoint is not a valid request URI: {0}")]
    Uri(#[from] http::uri::InvalidUri),
}
