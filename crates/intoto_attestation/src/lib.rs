// SPDX-License-Identifier: Apache-2.0

//! Builders for unsigned in-toto v1 attestation statements.
//!
//! A producer describes artifacts as [`ResourceDescriptor`]s (directly, or
//! derived from a file, a Git remote, or a Maven coordinate), collects them
//! into a [`Subject`], and binds that to a [`Predicate`] in a [`Statement`].
//! Signing and verification are left to other tools.

pub mod descriptors;
pub mod error;
pub mod git;
pub mod models;
pub mod utils;

pub use descriptors::{
    git::{GitRepositoryResourceDescriptor, GitRepositoryResourceDescriptorBuilder},
    maven::MavenDependency,
};
pub use error::{DigestCalculationError, FileResourceError, GitUrlError, StatementError};
pub use models::{
    digest_set::DigestSet,
    predicate::Predicate,
    resource_descriptor::{ResourceDescriptor, ResourceDescriptorBuilder},
    statement::{Statement, StatementBuilder},
    subject::{Subject, SubjectBuilder},
};
