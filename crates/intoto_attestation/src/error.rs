// SPDX-License-Identifier: Apache-2.0

//! Error types for statement construction and descriptor derivation.

use std::path::PathBuf;

/// Errors raised while assembling a [`Statement`](crate::models::statement::Statement).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StatementError {
    /// A required statement field was not supplied. Carries the wire key.
    #[error("the {0} value of the statement cannot be null")]
    MissingField(&'static str),
}

/// Errors raised while parsing a Git remote-origin URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GitUrlError {
    /// The URL was empty.
    #[error("the Git repo URL cannot be null or empty")]
    NullOrEmpty,

    /// The URL matched none of the accepted patterns.
    #[error(
        "The owner and repository name cannot be extracted from the [{url}] Git repo URL because the URL does not match an expected pattern. The expected patterns are: [{}].",
        .patterns.join(", ")
    )]
    Format {
        /// The offending URL.
        url: String,
        /// Every pattern that was tried, in order.
        patterns: [&'static str; 2],
    },
}

/// Failure while hashing the bytes of a file.
#[derive(Debug, thiserror::Error)]
#[error(
    "An error occurred while calculating the digest for the {} file: {source}",
    .path.display()
)]
pub struct DigestCalculationError {
    /// Absolute path of the file being hashed.
    pub path: PathBuf,
    /// The underlying I/O failure.
    pub source: std::io::Error,
}

/// Errors raised while deriving a descriptor from a file on disk.
#[derive(Debug, thiserror::Error)]
pub enum FileResourceError {
    /// No path was given.
    #[error("the file object is null")]
    Null,

    /// The path does not exist.
    #[error("the file does not exist: {}", .0.display())]
    DoesNotExist(PathBuf),

    /// The path exists but is a directory or other non-regular file.
    #[error("the artifact is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Hashing the file failed.
    #[error(transparent)]
    Digest(#[from] DigestCalculationError),
}
