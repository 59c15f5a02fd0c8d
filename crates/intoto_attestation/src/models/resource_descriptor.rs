// SPDX-License-Identifier: Apache-2.0

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::digest_set::DigestSet;
use crate::utils::add_if_non_empty;

/// A size-efficient pointer to an artifact.
///
/// See: <https://github.com/in-toto/attestation/blob/main/spec/v1/resource_descriptor.md>
///
/// At least one of `uri`, `digest` or `content` should be set. That is the
/// producer's responsibility and is not checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceDescriptor {
    pub(crate) name: Option<String>,
    pub(crate) uri: Option<String>,
    pub(crate) digest: DigestSet,
    pub(crate) content: Option<String>,
    pub(crate) download_location: Option<String>,
    pub(crate) media_type: Option<String>,
    pub(crate) annotations: Option<Map<String, Value>>,
}

impl ResourceDescriptor {
    pub const KEY_NAME: &str = "name";
    pub const KEY_URI: &str = "uri";
    pub const KEY_DIGEST: &str = "digest";
    pub const KEY_CONTENT: &str = "content";
    pub const KEY_DOWNLOAD_LOCATION: &str = "downloadLocation";
    pub const KEY_MEDIA_TYPE: &str = "mediaType";
    pub const KEY_ANNOTATIONS: &str = "annotations";

    pub fn builder() -> ResourceDescriptorBuilder {
        ResourceDescriptorBuilder::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn digest(&self) -> &DigestSet {
        &self.digest
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn download_location(&self) -> Option<&str> {
        self.download_location.as_deref()
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn annotations(&self) -> Option<&Map<String, Value>> {
        self.annotations.as_ref()
    }

    /// Minimal JSON form of the descriptor.
    ///
    /// Only non-empty fields are emitted, always in the order name, uri,
    /// digest, content, downloadLocation, mediaType, annotations. A descriptor
    /// with nothing set yields `{}`.
    pub fn to_json(&self) -> Map<String, Value> {
        let mut object = Map::new();
        add_if_non_empty(&mut object, Self::KEY_NAME, self.name.as_deref());
        add_if_non_empty(&mut object, Self::KEY_URI, self.uri.as_deref());
        add_if_non_empty(&mut object, Self::KEY_DIGEST, Some(self.digest.build()));
        add_if_non_empty(&mut object, Self::KEY_CONTENT, self.content.as_deref());
        add_if_non_empty(
            &mut object,
            Self::KEY_DOWNLOAD_LOCATION,
            self.download_location.as_deref(),
        );
        add_if_non_empty(
            &mut object,
            Self::KEY_MEDIA_TYPE,
            self.media_type.as_deref(),
        );
        add_if_non_empty(
            &mut object,
            Self::KEY_ANNOTATIONS,
            self.annotations.as_ref(),
        );
        object
    }
}

impl AsRef<ResourceDescriptor> for ResourceDescriptor {
    fn as_ref(&self) -> &ResourceDescriptor {
        self
    }
}

impl Serialize for ResourceDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Fluent builder for [`ResourceDescriptor`]. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct ResourceDescriptorBuilder {
    name: Option<String>,
    uri: Option<String>,
    digest: DigestSet,
    content: Option<String>,
    download_location: Option<String>,
    media_type: Option<String>,
    annotations: Option<Map<String, Value>>,
}

impl ResourceDescriptorBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn digest(mut self, digest: DigestSet) -> Self {
        self.digest = digest;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn download_location(mut self, download_location: impl Into<String>) -> Self {
        self.download_location = Some(download_location.into());
        self
    }

    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn annotations(mut self, annotations: Map<String, Value>) -> Self {
        self.annotations = Some(annotations);
        self
    }

    pub fn build(self) -> ResourceDescriptor {
        let ResourceDescriptorBuilder {
            name,
            uri,
            digest,
            content,
            download_location,
            media_type,
            annotations,
        } = self;

        ResourceDescriptor {
            name,
            uri,
            digest,
            content,
            download_location,
            media_type,
            annotations,
        }
    }
}
