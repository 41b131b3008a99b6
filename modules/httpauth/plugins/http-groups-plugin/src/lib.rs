#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! HTTP Group Resolver Plugin
//!
//! Resolves a username to its group memberships through a remote group
//! service:
//!
//! ```text
//! POST <endpoint>
//! Content-Type: application/json
//!
//! {"username": "<username>"}
//! ```
//!
//! answered by `{"groups": ["<name>", ...]}`. Duplicate names collapse.
//!
//! Transport faults and non-2xx statuses are `GroupServiceUnavailable`; a body
//! of the wrong shape is `MalformedGroupResponse`. Whether an unavailable
//! service means "no groups" is left to the caller.
//!
//! ## Configuration
//!
//! ```properties
//! http-groupprovider.endpoint=https://groups.example.com/lookup
//! http-groupprovider.request-timeout=5s
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::{HttpGroupsPlugin, PLUGIN_NAME};
