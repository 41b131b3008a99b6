//! Client implementation for the HTTP credential validator.
//!
//! Implements `CredentialValidatorClient` using the domain service and folds
//! every domain error into the public failure kind.

use async_trait::async_trait;
use httpauth_sdk::{AuthFailure, Challenge, CredentialValidatorClient, Principal};

use super::error::DomainError;
use super::service::Service;

fn log_and_convert(e: DomainError) -> AuthFailure {
    match &e {
        DomainError::Rejected(status) => {
            tracing::warn!(status = status.as_u16(), "authentication failed");
        }
        DomainError::Transport(err) => {
            tracing::error!(error = %err, "authentication endpoint call failed");
        }
        DomainError::UnencodableChallenge
        | DomainError::Malformed(_)
        | DomainError::MissingPrincipal => {
            tracing::warn!(error = %e, "authentication failed");
        }
    }
    e.into()
}

#[async_trait]
impl CredentialValidatorClient for Service {
    async fn authenticate(&self, challenge: &Challenge) -> Result<Principal, AuthFailure> {
        Service::authenticate(self, challenge)
            .await
            .map_err(log_and_convert)
    }
}
