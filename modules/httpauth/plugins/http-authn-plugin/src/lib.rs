#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! HTTP Credential Validator Plugin
//!
//! Validates the `Authorization` challenge of an inbound request by
//! forwarding it verbatim to a remote authentication endpoint.
//!
//! ## Wire contract
//!
//! ```text
//! POST <endpoint>
//! Authorization: <challenge>
//! Content-Type: application/json
//! Accept: application/json
//!
//! {}
//! ```
//!
//! A `200` answer with `{"principal": "<name>"}` authenticates the caller.
//! Every other outcome (other status, missing `principal`, unparsable body,
//! unreachable endpoint) is `InvalidCredential`.
//!
//! ## Configuration
//!
//! ```properties
//! http-authenticator.endpoint=https://auth.example.com/validate
//! http-authenticator.connect-timeout=2s
//! http-authenticator.request-timeout=5s
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::{HttpAuthNPlugin, PLUGIN_NAME};
