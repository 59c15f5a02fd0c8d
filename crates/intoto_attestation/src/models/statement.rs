// SPDX-License-Identifier: Apache-2.0

//! in-toto v1 attestation statement builder.
//!
//! See: <https://github.com/in-toto/attestation/blob/main/spec/v1/statement.md>

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use super::{predicate::Predicate, subject::Subject};
use crate::{error::StatementError, utils::add_if_non_empty};

/// An unsigned in-toto statement binding a subject to a predicate.
#[derive(Debug)]
pub struct Statement {
    statement_type: String,
    subject: Subject,
    predicate_type: String,
    predicate: Option<Box<dyn Predicate>>,
}

impl Statement {
    /// The canonical statement type URI.
    pub const TYPE_V1: &str = "https://in-toto.io/Statement/v1";

    pub const KEY_TYPE: &str = "_type";
    pub const KEY_SUBJECT: &str = "subject";
    pub const KEY_PREDICATE_TYPE: &str = "predicateType";
    pub const KEY_PREDICATE: &str = "predicate";

    /// Shorthand for [`StatementBuilder::new`].
    pub fn builder(
        statement_type: Option<&str>,
        subject: Option<Subject>,
        predicate_type: Option<&str>,
    ) -> Result<StatementBuilder, StatementError> {
        StatementBuilder::new(statement_type, subject, predicate_type)
    }

    pub fn statement_type(&self) -> &str {
        &self.statement_type
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn predicate_type(&self) -> &str {
        &self.predicate_type
    }

    pub fn predicate(&self) -> Option<&dyn Predicate> {
        self.predicate.as_deref()
    }

    /// The statement document.
    ///
    /// `predicate` is left out when no predicate was attached or when its
    /// parameters are absent or empty.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut object = Map::new();
        object.insert(
            Self::KEY_TYPE.to_owned(),
            Value::String(self.statement_type.clone()),
        );
        object.insert(
            Self::KEY_SUBJECT.to_owned(),
            Value::Array(self.subject.to_json()),
        );
        object.insert(
            Self::KEY_PREDICATE_TYPE.to_owned(),
            Value::String(self.predicate_type.clone()),
        );
        if let Some(predicate) = &self.predicate {
            add_if_non_empty(
                &mut object,
                Self::KEY_PREDICATE,
                predicate.predicate_parameters(),
            );
        }
        object
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        debug!(
            predicate_type = %self.predicate_type,
            subjects = self.subject.len(),
            "serializing statement"
        );
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        debug!(
            predicate_type = %self.predicate_type,
            subjects = self.subject.len(),
            "serializing statement"
        );
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Builder for [`Statement`].
///
/// The three required fields are checked up front, in the order `_type`,
/// `subject`, `predicateType`.
#[derive(Debug)]
pub struct StatementBuilder {
    statement_type: String,
    subject: Subject,
    predicate_type: String,
    predicate: Option<Box<dyn Predicate>>,
}

impl StatementBuilder {
    pub fn new(
        statement_type: Option<&str>,
        subject: Option<Subject>,
        predicate_type: Option<&str>,
    ) -> Result<Self, StatementError> {
        let statement_type =
            statement_type.ok_or(StatementError::MissingField(Statement::KEY_TYPE))?;
        let subject = subject.ok_or(StatementError::MissingField(Statement::KEY_SUBJECT))?;
        let predicate_type =
            predicate_type.ok_or(StatementError::MissingField(Statement::KEY_PREDICATE_TYPE))?;

        Ok(Self {
            statement_type: statement_type.to_owned(),
            subject,
            predicate_type: predicate_type.to_owned(),
            predicate: None,
        })
    }

    pub fn predicate(mut self, predicate: impl Predicate + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    pub fn build(self) -> Statement {
        let StatementBuilder {
            statement_type,
            subject,
            predicate_type,
            predicate,
        } = self;

        Statement {
            statement_type,
            subject,
            predicate_type,
            predicate,
        }
    }
}
