// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Map;
use tracing::{debug, warn};

use crate::{models::resource_descriptor::ResourceDescriptor, utils::add_if_non_empty};

/// Base of the artifact page URL; `/{group path}/{artifactId}/{version}` is appended.
pub const MAVEN_CENTRAL_ARTIFACT_URL: &str = "https://central.sonatype.com/artifact";

pub const KEY_ANNOTATION_TYPE: &str = "type";
pub const KEY_ANNOTATION_SCOPE: &str = "scope";

/// A Maven dependency coordinate. Every part may be missing.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MavenDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    /// Packaging type (e.g., "jar", "war").
    #[serde(rename = "type")]
    pub type_: Option<String>,
    /// Dependency scope (e.g., "compile", "test", "provided").
    pub scope: Option<String>,
}

// Missing coordinate parts are rendered literally rather than rejected.
fn coordinate(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or("null")
}

impl ResourceDescriptor {
    /// Describe a Maven artifact by its `group:artifact:version` coordinate.
    ///
    /// `uri` points at the Maven Central artifact page and is left unset when
    /// there is no `groupId`. `type` and `scope` go into the annotations.
    pub fn from_maven_dependency(dependency: &MavenDependency) -> Self {
        let MavenDependency {
            group_id,
            artifact_id,
            version,
            type_,
            scope,
        } = dependency;

        let name = format!(
            "{}:{}:{}",
            coordinate(group_id),
            coordinate(artifact_id),
            coordinate(version)
        );

        let uri = match group_id {
            Some(group_id) => Some(format!(
                "{MAVEN_CENTRAL_ARTIFACT_URL}/{}/{}/{}",
                group_id.replace('.', "/"),
                coordinate(artifact_id),
                coordinate(version)
            )),
            None => {
                warn!(%name, "no groupId on Maven dependency, leaving uri unset");
                None
            }
        };

        let mut annotations = Map::new();
        add_if_non_empty(&mut annotations, KEY_ANNOTATION_TYPE, type_.as_deref());
        add_if_non_empty(&mut annotations, KEY_ANNOTATION_SCOPE, scope.as_deref());

        debug!(%name, uri = uri.as_deref().unwrap_or_default(), "derived Maven descriptor");

        Self {
            name: Some(name),
            uri,
            annotations: (!annotations.is_empty()).then_some(annotations),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn dependency(scope: &str, type_: &str) -> MavenDependency {
        MavenDependency {
            group_id: Some("com.example".to_owned()),
            artifact_id: Some("code-api".to_owned()),
            version: Some("1.0.0".to_owned()),
            type_: Some(type_.to_owned()),
            scope: Some(scope.to_owned()),
        }
    }

    fn assert_matches_dependency(descriptor: &ResourceDescriptor, scope: &str, type_: &str) {
        assert_eq!(descriptor.name(), Some("com.example:code-api:1.0.0"));
        assert_eq!(
            descriptor.uri(),
            Some("https://central.sonatype.com/artifact/com/example/code-api/1.0.0")
        );
        assert!(descriptor.digest().is_empty());
        assert_eq!(
            descriptor.annotations().cloned().map(Value::Object),
            Some(json!({"scope": scope, "type": type_}))
        );
        assert!(descriptor.content().is_none());
        assert!(descriptor.download_location().is_none());
        assert!(descriptor.media_type().is_none());
    }

    #[test]
    fn test_scope() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&dependency("test", "jar"));
        assert_matches_dependency(&descriptor, "test", "jar");
    }

    #[test]
    fn provided_scope() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&dependency("provided", "jar"));
        assert_matches_dependency(&descriptor, "provided", "jar");
    }

    #[test]
    fn missing_annotation_parts_are_omitted() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&MavenDependency {
            scope: None,
            ..dependency("compile", "war")
        });
        assert_eq!(
            descriptor.annotations().cloned().map(Value::Object),
            Some(json!({"type": "war"}))
        );
    }

    #[test]
    fn empty_dependency_does_not_fail() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&MavenDependency::default());

        assert_eq!(descriptor.name(), Some("null:null:null"));
        assert!(descriptor.uri().is_none(), "no groupId means no uri");
        assert!(descriptor.digest().is_empty());
        assert!(descriptor.content().is_none());
        assert!(descriptor.download_location().is_none());
        assert!(descriptor.media_type().is_none());
        assert!(descriptor.annotations().is_none());
    }

    #[test]
    fn missing_artifact_and_version_render_as_null() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&MavenDependency {
            group_id: Some("com.example".to_owned()),
            ..MavenDependency::default()
        });

        assert_eq!(descriptor.name(), Some("com.example:null:null"));
        assert_eq!(
            descriptor.uri(),
            Some("https://central.sonatype.com/artifact/com/example/null/null")
        );
        assert!(descriptor.annotations().is_none());
    }

    #[test]
    fn serialized_form() {
        let descriptor = ResourceDescriptor::from_maven_dependency(&dependency("test", "jar"));
        let json = descriptor.to_json();
        let keys: Vec<&str> = json.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "uri", "annotations"]);
    }

    #[test]
    fn deserializes_from_camel_case() {
        let dependency: MavenDependency = serde_json::from_value(json!({
            "groupId": "com.example",
            "artifactId": "code-api",
            "version": "1.0.0",
            "type": "jar"
        }))
        .expect("deserialize");
        assert_eq!(dependency.type_.as_deref(), Some("jar"));
        assert!(dependency.scope.is_none());
    }
}
