//! HTTP transport for the httpauth plugins.
//!
//! Provides the pieces both plugins share:
//!
//! - [`HttpClient`] - pooled HTTP/1.1 client (plain and TLS) with optional timeouts
//! - [`decode_object`] - strict "JSON object into typed struct" decoding
//! - [`parse_endpoint`] - validation of configured endpoint URLs
//! - [`serde_duration`] - humantime durations in configuration
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod serde_duration;

pub use client::{HttpClient, HttpClientBuilder, HttpResponse};
pub use decode::decode_object;
pub use endpoint::parse_endpoint;
pub use error::{DecodeError, EndpointError, TransportError};
