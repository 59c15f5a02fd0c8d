// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use tracing::debug;

use crate::{
    error::FileResourceError,
    models::{digest_set::DigestSet, resource_descriptor::ResourceDescriptor},
    utils::sha256_file,
};

impl ResourceDescriptor {
    /// Describe a file by its base name and the SHA-256 of its contents.
    ///
    /// The path is checked before any bytes are read.
    ///
    /// # Errors
    ///
    /// [`FileResourceError::Null`] for an empty path,
    /// [`FileResourceError::DoesNotExist`], [`FileResourceError::NotAFile`],
    /// or [`FileResourceError::Digest`] if reading the file fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FileResourceError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(FileResourceError::Null);
        }

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if !path.exists() {
            return Err(FileResourceError::DoesNotExist(absolute));
        }
        if !path.is_file() {
            return Err(FileResourceError::NotAFile(absolute));
        }

        let hash = sha256_file(path)?;
        debug!(path = %absolute.display(), sha256 = %hash, "computed file digest");

        let mut digest = DigestSet::new();
        digest.insert(DigestSet::ALG_SHA256, hash);

        Ok(Self {
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            digest,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const SIMPLE_TXT: &str = "simple.txt";
    const SIMPLE_TXT_CONTENT: &[u8] = b"hello";
    const SIMPLE_TXT_SHA256: &str =
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

    #[test]
    fn empty_path() {
        let err = ResourceDescriptor::from_file("").expect_err("empty path should fail");
        assert!(matches!(err, FileResourceError::Null));
        assert_eq!(err.to_string(), "the file object is null");
    }

    #[test]
    fn path_is_directory() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = ResourceDescriptor::from_file(tmp.path()).expect_err("directory");
        let message = err.to_string();
        assert!(matches!(err, FileResourceError::NotAFile(_)));
        assert!(message.contains("artifact is not a file"), "{message}");
    }

    #[test]
    fn path_does_not_exist() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let missing = tmp.path().join("does-not-exist");
        let err = ResourceDescriptor::from_file(&missing).expect_err("missing file");
        let message = err.to_string();
        match &err {
            FileResourceError::DoesNotExist(path) => assert!(path.ends_with("does-not-exist")),
            other => panic!("expected DoesNotExist, got {other:?}"),
        }
        assert!(message.contains("file does not exist"), "{message}");
    }

    #[test]
    fn regular_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join(SIMPLE_TXT);
        std::fs::write(&path, SIMPLE_TXT_CONTENT).expect("write failed");

        let descriptor = ResourceDescriptor::from_file(&path).expect("should describe file");

        assert_eq!(descriptor.name(), Some(SIMPLE_TXT));
        assert_eq!(
            Value::Object(descriptor.digest().build()),
            json!({"sha256": SIMPLE_TXT_SHA256})
        );
        assert!(descriptor.uri().is_none());
        assert!(descriptor.content().is_none());
        assert!(descriptor.download_location().is_none());
        assert!(descriptor.media_type().is_none());
        assert!(descriptor.annotations().is_none());
    }

    #[test]
    fn digest_is_full_length_hex() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("empty.bin");
        std::fs::write(&path, b"").expect("write failed");

        let descriptor = ResourceDescriptor::from_file(&path).expect("should describe file");
        let hash = descriptor
            .digest()
            .get(DigestSet::ALG_SHA256)
            .expect("sha256");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
