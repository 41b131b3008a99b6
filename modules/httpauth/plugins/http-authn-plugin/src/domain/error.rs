//! Domain errors for the HTTP credential validator.

use http::StatusCode;
use httpauth_sdk::AuthFailure;
use httpauth_transport::{DecodeError, TransportError};

/// Internal domain errors.
///
/// Kept for logging; every variant is reported to callers as
/// [`AuthFailure::InvalidCredential`].
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("challenge cannot be carried in an HTTP header")]
    UnencodableChallenge,

    #[error("authentication endpoint unreachable: {0}")]
    Transport(#[from] TransportError),

    #[error("authentication endpoint answered with status {0}")]
    Rejected(StatusCode),

    #[error("malformed authentication response: {0}")]
    Malformed(#[from] DecodeError),

    #[error("authentication response carries no principal")]
    MissingPrincipal,
}

impl From<DomainError> for AuthFailure {
    fn from(_: DomainError) -> Self {
        Self::InvalidCredential
    }
}
