//! Request and response models.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;

use http::HeaderMap;
use http::header::AUTHORIZATION;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthFailure, GroupResolutionFailure};

/// Raw value of an inbound `Authorization` header.
///
/// Opaque credential material forwarded verbatim. Wrapped in `SecretString`
/// so `Debug` redacts it.
#[derive(Clone)]
pub struct Challenge(SecretString);

impl Challenge {
    /// Wrap a challenge value.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure::MissingCredential`] for an empty or
    /// whitespace-only value.
    pub fn new(value: impl Into<String>) -> Result<Self, AuthFailure> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AuthFailure::MissingCredential);
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Take the challenge from the values of an `Authorization` header.
    ///
    /// Only the first value is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFailure::MissingCredential`] when the list is absent,
    /// empty, or its first value is blank.
    pub fn from_header_values<S: AsRef<str>>(values: Option<&[S]>) -> Result<Self, AuthFailure> {
        let first = values
            .and_then(<[S]>::first)
            .ok_or(AuthFailure::MissingCredential)?;
        Self::new(first.as_ref())
    }

    /// Take the challenge from the first `Authorization` entry of a header map.
    ///
    /// # Errors
    ///
    /// - [`AuthFailure::MissingCredential`] if there is no usable entry
    /// - [`AuthFailure::InvalidCredential`] if the value is not visible ASCII
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthFailure> {
        let value = headers
            .get(AUTHORIZATION)
            .ok_or(AuthFailure::MissingCredential)?;
        let value = value
            .to_str()
            .map_err(|_| AuthFailure::InvalidCredential)?;
        Self::new(value)
    }

    /// The raw challenge, for forwarding to the authentication endpoint.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Challenge([REDACTED])")
    }
}

/// Identity of an authenticated user. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal(String);

impl Principal {
    /// Returns `None` for an empty name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_name(self) -> String {
        self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered set of group names. Empty is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSet(HashSet<String>);

impl GroupSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was not yet present.
    pub fn insert(&mut self, group: impl Into<String>) -> bool {
        self.0.insert(group.into())
    }

    #[must_use]
    pub fn contains(&self, group: &str) -> bool {
        self.0.contains(group)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_inner(self) -> HashSet<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for GroupSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for GroupSet {
    type Item = String;
    type IntoIter = hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroupSet {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Caller policy for an unreachable group service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnavailablePolicy {
    /// Treat an unavailable service as "user has no groups".
    FailOpen,
    /// Surface the failure.
    #[default]
    FailClosed,
}

impl UnavailablePolicy {
    /// Apply the policy to a resolution result.
    ///
    /// A malformed response is returned unchanged under either policy.
    ///
    /// # Errors
    ///
    /// Returns the original failure unless it is `GroupServiceUnavailable`
    /// under [`UnavailablePolicy::FailOpen`].
    pub fn apply(
        self,
        result: Result<GroupSet, GroupResolutionFailure>,
    ) -> Result<GroupSet, GroupResolutionFailure> {
        match (self, result) {
            (Self::FailOpen, Err(GroupResolutionFailure::GroupServiceUnavailable(_))) => {
                Ok(GroupSet::new())
            }
            (_, other) => other,
        }
    }
}
