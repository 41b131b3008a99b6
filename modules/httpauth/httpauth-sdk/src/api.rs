//! Public API traits.
//!
//! Each operation is a single remote round trip. Implementations hold no
//! per-call state and may be shared across tasks.

use async_trait::async_trait;

use crate::error::{AuthFailure, GroupResolutionFailure};
use crate::models::{Challenge, GroupSet, Principal};

/// Validates inbound credentials against a remote authentication endpoint.
///
/// ```ignore
/// let principal = validator.authenticate_headers(Some(values.as_slice())).await?;
/// ```
#[async_trait]
pub trait CredentialValidatorClient: Send + Sync {
    /// Validate a challenge and return the resolved identity.
    ///
    /// # Errors
    ///
    /// - `InvalidCredential` if the endpoint rejected the challenge, could not
    ///   be reached, or answered with an unusable body
    async fn authenticate(&self, challenge: &Challenge) -> Result<Principal, AuthFailure>;

    /// Validate the first value of an `Authorization` header.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if `values` is absent or empty; no remote call is made
    /// - otherwise as [`authenticate`](Self::authenticate)
    async fn authenticate_headers(
        &self,
        values: Option<&[String]>,
    ) -> Result<Principal, AuthFailure> {
        let challenge = Challenge::from_header_values(values)?;
        self.authenticate(&challenge).await
    }
}

/// Resolves usernames to group memberships through a remote group service.
#[async_trait]
pub trait GroupResolverClient: Send + Sync {
    /// Resolve the groups of `username`.
    ///
    /// # Errors
    ///
    /// - `GroupServiceUnavailable` on transport faults or an error status
    /// - `MalformedGroupResponse` if the body is not `{"groups": [<string>...]}`
    async fn resolve_groups(&self, username: &str) -> Result<GroupSet, GroupResolutionFailure>;
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Default)]
    struct CountingValidator {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CredentialValidatorClient for CountingValidator {
        async fn authenticate(&self, challenge: &Challenge) -> Result<Principal, AuthFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Principal::new(challenge.expose()).ok_or(AuthFailure::InvalidCredential)
        }
    }

    #[tokio::test]
    async fn missing_header_never_reaches_authenticate() {
        let validator = CountingValidator::default();

        let absent = validator.authenticate_headers(None).await;
        let empty = validator.authenticate_headers(Some(&[][..])).await;

        assert_eq!(absent.unwrap_err(), AuthFailure::MissingCredential);
        assert_eq!(empty.unwrap_err(), AuthFailure::MissingCredential);
        assert_eq!(validator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn first_header_value_is_forwarded() {
        let validator = CountingValidator::default();
        let values = vec!["alice".to_owned(), "bob".to_owned()];

        let principal = validator
            .authenticate_headers(Some(values.as_slice()))
            .await
            .unwrap();

        assert_eq!(principal.name(), "alice");
        assert_eq!(validator.calls.load(Ordering::SeqCst), 1);
    }
}
