// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use serde_json::{Map, Value};

/// The type-specific payload of a statement.
///
/// No concrete predicates ship with this crate; callers implement this trait
/// for provenance, scan results, or whatever claim they are making.
pub trait Predicate: fmt::Debug {
    /// Type URI identifying the predicate schema.
    fn predicate_type(&self) -> &str;

    /// The predicate body. `None` or an empty object means no predicate is
    /// emitted.
    fn predicate_parameters(&self) -> Option<Map<String, Value>>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Predicate with caller-chosen parameters, for statement tests.
    #[derive(Debug)]
    pub(crate) struct TestPredicate {
        pub(crate) parameters: Option<Map<String, Value>>,
    }

    impl TestPredicate {
        pub(crate) const PREDICATE_TYPE: &str = "https://localhost/test/predicate/v1";
    }

    impl Predicate for TestPredicate {
        fn predicate_type(&self) -> &str {
            Self::PREDICATE_TYPE
        }

        fn predicate_parameters(&self) -> Option<Map<String, Value>> {
            self.parameters.clone()
        }
    }

    #[test]
    fn absent_parameters() {
        let predicate = TestPredicate { parameters: None };
        assert_eq!(predicate.predicate_type(), TestPredicate::PREDICATE_TYPE);
        assert!(predicate.predicate_parameters().is_none());
    }

    #[test]
    fn parameters_are_returned_verbatim() {
        let mut parameters = Map::new();
        parameters.insert("special-key".to_owned(), json!("special value"));
        let predicate = TestPredicate {
            parameters: Some(parameters.clone()),
        };
        assert_eq!(predicate.predicate_parameters(), Some(parameters));
    }
}
