//! Error types for the httpauth plugins.

use thiserror::Error;

/// Why a credential was not turned into a [`Principal`](crate::Principal).
///
/// Unreachable endpoint, rejected credential and malformed endpoint response
/// all collapse into [`AuthFailure::InvalidCredential`]; only the absence of
/// a credential is reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// No `Authorization` value was supplied. No remote call was made.
    #[error("missing Authorization header")]
    MissingCredential,

    /// The credential was rejected or could not be validated.
    #[error("invalid or missing login or access token")]
    InvalidCredential,
}

/// Why a username could not be resolved to its groups.
///
/// The two kinds are kept apart so the caller can decide whether an
/// unavailable service means "no groups" or an error; see
/// [`UnavailablePolicy`](crate::UnavailablePolicy).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupResolutionFailure {
    /// The group service could not be reached or did not serve the request.
    #[error("group service unavailable: {0}")]
    GroupServiceUnavailable(String),

    /// The group service answered with a body of the wrong shape.
    #[error("malformed group response: {0}")]
    MalformedGroupResponse(String),
}

impl GroupResolutionFailure {
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::GroupServiceUnavailable(_))
    }
}

/// A plugin could not be constructed from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid '{prefix}' configuration: {reason}")]
    Invalid { prefix: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Transport(String),
}
