//! Wire format of the group service.

use httpauth_sdk::GroupSet;
use serde::{Deserialize, Serialize};

/// Request body: `{"username": "<username>"}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupRequest<'a> {
    #[serde(borrow)]
    pub username: std::borrow::Cow<'a, str>,
}

impl<'a> GroupRequest<'a> {
    #[must_use]
    pub fn new(username: &'a str) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Response body. `groups` is required and every element must be a string;
/// other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct GroupResponse {
    pub groups: Vec<String>,
}

impl From<GroupResponse> for GroupSet {
    fn from(response: GroupResponse) -> Self {
        response.groups.into_iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use httpauth_transport::decode_object;

    fn groups_of(body: &str) -> Option<GroupSet> {
        decode_object::<GroupResponse>(body.as_bytes())
            .ok()
            .map(GroupSet::from)
    }

    #[test]
    fn request_payload_round_trips_username() {
        for username in ["alice", "bob@example.com", "", "\u{540d}\u{524d}", "quote\"and\\slash"] {
            let encoded = serde_json::to_vec(&GroupRequest::new(username)).unwrap();
            let echoed: GroupRequest<'_> = serde_json::from_slice(&encoded).unwrap();
            assert_eq!(echoed.username, username);
        }
    }

    #[test]
    fn request_payload_shape() {
        let encoded = serde_json::to_value(GroupRequest::new("alice")).unwrap();
        assert_eq!(encoded, serde_json::json!({ "username": "alice" }));
    }

    #[test]
    fn duplicates_collapse() {
        let groups = groups_of(r#"{"groups":["a","b","a"]}"#).unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups.contains("a") && groups.contains("b"));
    }

    #[test]
    fn empty_array_is_empty_set() {
        assert!(groups_of(r#"{"groups":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let groups = groups_of(r#"{"user":"alice","groups":["ops"],"ttl":60}"#).unwrap();
        assert!(groups.contains("ops"));
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        assert!(groups_of(r#"{"roles":["a"]}"#).is_none());
        assert!(groups_of(r#"{"groups":null}"#).is_none());
        assert!(groups_of(r#"{"groups":"a"}"#).is_none());
        assert!(groups_of(r#"{"groups":["a",1]}"#).is_none());
        assert!(groups_of(r#"{"groups":[["a"]]}"#).is_none());
        assert!(groups_of(r#"[["a"]]"#).is_none());
    }
}
