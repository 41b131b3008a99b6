//! httpauth SDK
//!
//! Public contract shared by the HTTP delegation plugins:
//!
//! - [`CredentialValidatorClient`] - validate an `Authorization` challenge remotely
//! - [`GroupResolverClient`] - resolve a username to its groups remotely
//! - [`CredentialValidatorFactory`] / [`GroupResolverFactory`] - named constructors
//!   driven by a flat property map
//! - [`Challenge`], [`Principal`], [`GroupSet`] - request/response models
//! - [`AuthFailure`], [`GroupResolutionFailure`], [`ConfigError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use httpauth_sdk::{CredentialValidatorClient, GroupResolverClient, UnavailablePolicy};
//!
//! let principal = validator.authenticate_headers(Some(&auth_values)).await?;
//! let groups = UnavailablePolicy::FailOpen
//!     .apply(resolver.resolve_groups(principal.name()).await)?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod properties;

// Re-export main types at crate root
pub use api::{CredentialValidatorClient, GroupResolverClient};
pub use error::{AuthFailure, ConfigError, GroupResolutionFailure};
pub use models::{Challenge, GroupSet, Principal, UnavailablePolicy};
pub use plugin_api::{CredentialValidatorFactory, GroupResolverFactory};
