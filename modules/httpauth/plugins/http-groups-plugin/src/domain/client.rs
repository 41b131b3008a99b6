//! Client implementation for the HTTP group resolver plugin.

use async_trait::async_trait;
use httpauth_sdk::{GroupResolutionFailure, GroupResolverClient, GroupSet};

use super::error::DomainError;
use super::service::Service;

fn log_and_convert(e: DomainError) -> GroupResolutionFailure {
    tracing::error!(operation = "resolve_groups", error = %e, "group resolution failed");
    e.into()
}

#[async_trait]
impl GroupResolverClient for Service {
    async fn resolve_groups(&self, username: &str) -> Result<GroupSet, GroupResolutionFailure> {
        Service::resolve_groups(self, username)
            .await
            .map_err(log_and_convert)
    }
}
