//! Domain errors for the HTTP group resolver.

use http::StatusCode;
use httpauth_sdk::GroupResolutionFailure;
use httpauth_transport::{DecodeError, TransportError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("failed to encode group request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("group service unreachable: {0}")]
    Transport(#[from] TransportError),

    #[error("group service answered with status {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Malformed(#[from] DecodeError),
}

impl From<DomainError> for GroupResolutionFailure {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Transport(_) | DomainError::Status(_) | DomainError::Encode(_) => {
                Self::GroupServiceUnavailable(e.to_string())
            }
            DomainError::Malformed(_) => Self::MalformedGroupResponse(e.to_string()),
        }
    }
}
