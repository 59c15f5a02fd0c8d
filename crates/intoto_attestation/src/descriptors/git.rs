// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::GitUrlError,
    git::build_github_repo_url,
    models::{
        digest_set::DigestSet,
        resource_descriptor::{ResourceDescriptor, ResourceDescriptorBuilder},
    },
};

/// A descriptor for a Git repository.
///
/// `uri` is the canonical GitHub URL derived from the remote. The raw remote
/// URL and the ref are kept alongside but never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct GitRepositoryResourceDescriptor {
    descriptor: ResourceDescriptor,
    git_repo_url: String,
    git_ref: Option<String>,
}

impl GitRepositoryResourceDescriptor {
    /// Start a descriptor from a remote-origin URL.
    ///
    /// # Errors
    ///
    /// Any [`GitUrlError`] from parsing `git_repo_url`.
    pub fn builder(
        git_repo_url: &str,
    ) -> Result<GitRepositoryResourceDescriptorBuilder, GitUrlError> {
        GitRepositoryResourceDescriptorBuilder::new(git_repo_url)
    }

    /// The remote URL exactly as given.
    pub fn git_repo_url(&self) -> &str {
        &self.git_repo_url
    }

    pub fn git_ref(&self) -> Option<&str> {
        self.git_ref.as_deref()
    }

    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn into_descriptor(self) -> ResourceDescriptor {
        self.descriptor
    }

    pub fn to_json(&self) -> Map<String, Value> {
        self.descriptor.to_json()
    }
}

impl Deref for GitRepositoryResourceDescriptor {
    type Target = ResourceDescriptor;

    fn deref(&self) -> &ResourceDescriptor {
        &self.descriptor
    }
}

impl AsRef<ResourceDescriptor> for GitRepositoryResourceDescriptor {
    fn as_ref(&self) -> &ResourceDescriptor {
        &self.descriptor
    }
}

impl Serialize for GitRepositoryResourceDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.descriptor.serialize(serializer)
    }
}

/// Builder for [`GitRepositoryResourceDescriptor`].
///
/// `uri` is fixed by the remote URL; the other descriptor fields can be set.
#[derive(Debug, Clone)]
pub struct GitRepositoryResourceDescriptorBuilder {
    git_repo_url: String,
    git_ref: Option<String>,
    descriptor: ResourceDescriptorBuilder,
}

impl GitRepositoryResourceDescriptorBuilder {
    pub fn new(git_repo_url: &str) -> Result<Self, GitUrlError> {
        let uri = build_github_repo_url(git_repo_url)?;
        debug!(%uri, "derived repository uri from git remote");

        Ok(Self {
            git_repo_url: git_repo_url.to_owned(),
            git_ref: None,
            descriptor: ResourceDescriptor::builder().uri(uri),
        })
    }

    /// Branch, tag or other ref the descriptor refers to.
    pub fn git_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = Some(git_ref.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.name(name);
        self
    }

    /// Digests of the repository state, typically [`DigestSet::GIT_COMMIT`].
    pub fn digest(mut self, digest: DigestSet) -> Self {
        self.descriptor = self.descriptor.digest(digest);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.content(content);
        self
    }

    pub fn download_location(mut self, download_location: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.download_location(download_location);
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.media_type(media_type);
        self
    }

    pub fn annotations(mut self, annotations: Map<String, Value>) -> Self {
        self.descriptor = self.descriptor.annotations(annotations);
        self
    }

    pub fn build(self) -> GitRepositoryResourceDescriptor {
        GitRepositoryResourceDescriptor {
            descriptor: self.descriptor.build(),
            git_repo_url: self.git_repo_url,
            git_ref: self.git_ref,
        }
    }
}
