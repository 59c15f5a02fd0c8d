// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

/// A set of digest algorithms and their hex-encoded values.
///
/// Keys are unique and the last write for an algorithm wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DigestSet {
    sets: BTreeMap<String, String>,
}

impl DigestSet {
    /// SHA-256 algorithm key.
    pub const ALG_SHA256: &str = "sha256";
    /// Git commit object id key.
    pub const GIT_COMMIT: &str = "gitCommit";

    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `digest_value` under `algorithm`.
    ///
    /// Does nothing when either argument is absent. Empty strings are stored.
    pub fn put(&mut self, algorithm: Option<&str>, digest_value: Option<&str>) {
        let (Some(algorithm), Some(digest_value)) = (algorithm, digest_value) else {
            trace!("dropping digest entry with an absent algorithm or value");
            return;
        };
        self.sets.insert(algorithm.to_owned(), digest_value.to_owned());
    }

    /// Stores `digest_value` under `algorithm`, replacing any earlier value.
    pub fn insert(&mut self, algorithm: impl Into<String>, digest_value: impl Into<String>) {
        self.sets.insert(algorithm.into(), digest_value.into());
    }

    pub fn get(&self, algorithm: &str) -> Option<&str> {
        self.sets.get(algorithm).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Builds the wire form: one member per stored pair, `{}` when empty.
    pub fn build(&self) -> Map<String, Value> {
        self.sets
            .iter()
            .map(|(alg, value)| (alg.clone(), Value::String(value.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_set_builds_empty_object() {
        let digest = DigestSet::new();
        assert!(digest.build().is_empty());
        assert!(digest.is_empty());
    }

    #[test]
    fn absent_algorithm_is_ignored() {
        let mut digest = DigestSet::new();
        digest.put(None, Some("abc123"));
        assert!(digest.build().is_empty(), "digest set should stay empty");
    }

    #[test]
    fn absent_value_is_ignored() {
        let mut digest = DigestSet::new();
        digest.put(Some(DigestSet::ALG_SHA256), None);
        assert!(digest.build().is_empty(), "digest set should stay empty");
    }

    #[test]
    fn empty_strings_are_stored() {
        let mut digest = DigestSet::new();
        digest.put(Some(""), Some("value"));
        digest.put(Some("key"), Some(""));
        assert_eq!(
            Value::Object(digest.build()),
            json!({"": "value", "key": ""})
        );
    }

    #[test]
    fn last_write_wins() {
        let mut digest = DigestSet::new();
        digest.put(Some(DigestSet::ALG_SHA256), Some("first"));
        digest.insert(DigestSet::ALG_SHA256, "second");
        assert_eq!(digest.len(), 1);
        assert_eq!(digest.get(DigestSet::ALG_SHA256), Some("second"));
    }

    #[test]
    fn multiple_algorithms() {
        let mut digest = DigestSet::new();
        digest.insert(DigestSet::ALG_SHA256, "abc");
        digest.insert(DigestSet::GIT_COMMIT, "def");
        assert_eq!(
            Value::Object(digest.build()),
            json!({"sha256": "abc", "gitCommit": "def"})
        );
    }

    #[test]
    fn equality_is_structural() {
        let mut left = DigestSet::new();
        left.insert("sha256", "abc");
        let mut right = DigestSet::new();
        right.put(Some("sha256"), Some("abc"));
        assert_eq!(left, right);

        right.insert("sha512", "def");
        assert_ne!(left, right);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut digest = DigestSet::new();
        digest.insert("sha256", "abc");
        let value = serde_json::to_value(&digest).expect("serialize");
        assert_eq!(value, json!({"sha256": "abc"}));
    }
}
