// SPDX-License-Identifier: Apache-2.0

//! Resource descriptors whose identity fields are derived from a source:
//! a file on disk, a Git remote, or a Maven coordinate.

pub mod file;
pub mod git;
pub mod maven;
