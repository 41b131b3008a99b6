//! Wire format of the authentication endpoint.

use httpauth_sdk::Principal;
use serde::Deserialize;

/// Request body. The endpoint only looks at the `Authorization` header.
pub const REQUEST_BODY: &[u8] = b"{}";

/// Successful (`200`) response body. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub principal: Option<PrincipalValue>,
}

/// Scalar forms accepted for `principal`. Objects and arrays are rejected.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PrincipalValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl AuthResponse {
    /// The principal in string form, if present and non-empty.
    #[must_use]
    pub fn into_principal(self) -> Option<Principal> {
        let name = match self.principal? {
            PrincipalValue::Text(s) => s,
            PrincipalValue::Number(n) => n.to_string(),
            PrincipalValue::Flag(b) => b.to_string(),
        };
        Principal::new(name)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use httpauth_transport::decode_object;

    fn principal_of(body: &str) -> Option<String> {
        decode_object::<AuthResponse>(body.as_bytes())
            .ok()?
            .into_principal()
            .map(Principal::into_name)
    }

    #[test]
    fn string_principal() {
        assert_eq!(
            principal_of(r#"{"principal":"alice","roles":["x"]}"#).as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn scalar_principals_use_their_string_form() {
        assert_eq!(principal_of(r#"{"principal":42}"#).as_deref(), Some("42"));
        assert_eq!(principal_of(r#"{"principal":true}"#).as_deref(), Some("true"));
    }

    #[test]
    fn absent_null_or_empty_principal_is_none() {
        assert_eq!(principal_of(r#"{"user":"alice"}"#), None);
        assert_eq!(principal_of(r#"{"principal":null}"#), None);
        assert_eq!(principal_of(r#"{"principal":""}"#), None);
    }

    #[test]
    fn structured_principal_is_rejected() {
        assert!(decode_object::<AuthResponse>(br#"{"principal":{"name":"alice"}}"#).is_err());
        assert!(decode_object::<AuthResponse>(br#"{"principal":["alice"]}"#).is_err());
    }
}
