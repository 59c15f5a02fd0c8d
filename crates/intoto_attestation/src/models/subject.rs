// SPDX-License-Identifier: Apache-2.0

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::resource_descriptor::ResourceDescriptor;

/// The ordered list of artifacts a statement's predicate applies to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subject {
    resource_descriptors: Vec<Map<String, Value>>,
}

impl Subject {
    pub fn builder() -> SubjectBuilder {
        SubjectBuilder::default()
    }

    /// Serialized descriptors in insertion order.
    pub fn resource_descriptors(&self) -> &[Map<String, Value>] {
        &self.resource_descriptors
    }

    pub fn len(&self) -> usize {
        self.resource_descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_descriptors.is_empty()
    }

    pub fn to_json(&self) -> Vec<Value> {
        self.resource_descriptors
            .iter()
            .cloned()
            .map(Value::Object)
            .collect()
    }
}

impl Serialize for Subject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.resource_descriptors.serialize(serializer)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubjectBuilder {
    resource_descriptors: Vec<Map<String, Value>>,
}

impl SubjectBuilder {
    /// Appends the descriptor's JSON form unless it serializes to `{}`.
    ///
    /// Adding the same descriptor twice appends it twice.
    pub fn resource_descriptor(mut self, descriptor: impl AsRef<ResourceDescriptor>) -> Self {
        let json = descriptor.as_ref().to_json();
        if !json.is_empty() {
            self.resource_descriptors.push(json);
        }
        self
    }

    pub fn build(self) -> Subject {
        Subject {
            resource_descriptors: self.resource_descriptors,
        }
    }
}
