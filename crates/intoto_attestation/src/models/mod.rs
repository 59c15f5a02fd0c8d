// SPDX-License-Identifier: Apache-2.0

//! The in-toto v1 data model: digests, resource descriptors, subjects,
//! predicates and statements.

pub mod digest_set;
pub mod predicate;
pub mod resource_descriptor;
pub mod statement;
pub mod subject;
