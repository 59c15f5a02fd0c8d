// SPDX-License-Identifier: Apache-2.0

//! Shared helpers: minimal JSON assembly and SHA-256 digesting.

use std::{fs::File, io, path::Path};

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::error::DigestCalculationError;

/// A value that is written into a JSON object only when it carries content.
pub trait JsonField {
    /// Returns the JSON form of the value, or `None` when it is empty.
    fn into_field(self) -> Option<Value>;
}

impl JsonField for &str {
    fn into_field(self) -> Option<Value> {
        (!self.is_empty()).then(|| Value::String(self.to_owned()))
    }
}

impl JsonField for String {
    fn into_field(self) -> Option<Value> {
        (!self.is_empty()).then_some(Value::String(self))
    }
}

impl JsonField for Map<String, Value> {
    fn into_field(self) -> Option<Value> {
        (!self.is_empty()).then_some(Value::Object(self))
    }
}

impl JsonField for &Map<String, Value> {
    fn into_field(self) -> Option<Value> {
        (!self.is_empty()).then(|| Value::Object(self.clone()))
    }
}

impl JsonField for Vec<Value> {
    fn into_field(self) -> Option<Value> {
        (!self.is_empty()).then_some(Value::Array(self))
    }
}

impl JsonField for Value {
    fn into_field(self) -> Option<Value> {
        match self {
            Value::Null => None,
            Value::String(s) => s.into_field(),
            Value::Array(a) => a.into_field(),
            Value::Object(o) => o.into_field(),
            other => Some(other),
        }
    }
}

/// Inserts `entry` under `key` only if it is present and non-empty.
///
/// Empty strings, empty objects, empty arrays and `null` all count as absent.
pub fn add_if_non_empty<T>(object: &mut Map<String, Value>, key: &str, entry: Option<T>)
where
    T: JsonField,
{
    if let Some(value) = entry.and_then(JsonField::into_field) {
        object.insert(key.to_owned(), value);
    }
}

/// Compute the SHA-256 hex digest of a byte slice.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the SHA-256 hex digest of a file's contents.
///
/// The file is streamed through the hasher. Failures carry the absolute path.
pub fn sha256_file(path: &Path) -> Result<String, DigestCalculationError> {
    let digest = File::open(path)
        .and_then(|mut file| {
            let mut hasher = Sha256::new();
            io::copy(&mut file, &mut hasher)?;
            Ok(hasher.finalize())
        })
        .map_err(|source| DigestCalculationError {
            path: std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()),
            source,
        })?;

    Ok(hex::encode(digest))
}
