//! Named plugin constructors.
//!
//! The host engine configures each plugin through a flat map of string
//! properties and picks the implementation by name. Factories turn that map
//! into a shareable client.

use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{CredentialValidatorClient, GroupResolverClient};
use crate::error::ConfigError;

/// Constructs a [`CredentialValidatorClient`] from host properties.
pub trait CredentialValidatorFactory: Send + Sync {
    /// Registration name; also the property prefix.
    fn name(&self) -> &'static str;

    /// Build a validator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the properties do not describe a usable endpoint.
    fn create(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<Arc<dyn CredentialValidatorClient>, ConfigError>;
}

/// Constructs a [`GroupResolverClient`] from host properties.
pub trait GroupResolverFactory: Send + Sync {
    /// Registration name; also the property prefix.
    fn name(&self) -> &'static str;

    /// Build a resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the properties do not describe a usable endpoint.
    fn create(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<Arc<dyn GroupResolverClient>, ConfigError>;
}
