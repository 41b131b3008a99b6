//! Domain layer for the HTTP credential validator.

pub mod client;
pub mod error;
pub mod service;
pub mod wire;

pub use error::DomainError;
pub use service::Service;
