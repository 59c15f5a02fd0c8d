// SPDX-License-Identifier: Apache-2.0

//! Git remote-origin URL parsing.
//!
//! Accepts the SSH (`git@github.com:owner/repo.git`) and HTTP(S)
//! (`https://[user@]github.com/owner/repo.git`) forms, including the
//! `github.ibm.com` enterprise host, and canonicalizes them to
//! `https://github.com/{owner}/{repo}`.

use std::sync::OnceLock;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::GitUrlError;

pub const REGEX_GROUP_NAME_OWNER: &str = "owner";
pub const REGEX_GROUP_NAME_REPO_NAME: &str = "repo";

/// SSH remote form. Matched case-insensitively.
pub const GIT_REPO_SSH_PATTERN: &str =
    r"^git@github.(ibm.)?com:(?<owner>[^\/]+)\/(?<repo>.+).git$";

/// HTTP(S) remote form, with optional credentials. Matched case-insensitively.
pub const GIT_REPO_HTTP_PATTERN: &str =
    r"^https?://(?:[^@]+@)?(www.)?github.(ibm.)?com/(?<owner>[^\/]+)\/(?<repo>.+).git$";

const GITHUB_BASE_URL: &str = "https://github.com";

/// Owner and repository name extracted from a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRepoCoordinates {
    pub owner: String,
    pub repo: String,
}

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .ok()
    })
    .as_ref()
}

fn ssh_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, GIT_REPO_SSH_PATTERN)
}

fn http_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, GIT_REPO_HTTP_PATTERN)
}

/// The accepted patterns, in the order they are tried.
pub fn expected_url_patterns() -> [&'static str; 2] {
    [GIT_REPO_SSH_PATTERN, GIT_REPO_HTTP_PATTERN]
}

fn coordinates(captures: &Captures<'_>) -> Option<GitRepoCoordinates> {
    let owner = captures.name(REGEX_GROUP_NAME_OWNER)?.as_str();
    let repo = captures.name(REGEX_GROUP_NAME_REPO_NAME)?.as_str();
    Some(GitRepoCoordinates {
        owner: owner.to_owned(),
        repo: repo.to_owned(),
    })
}

/// Match `git_remote_origin_url` against the SSH form, then the HTTP(S) form.
///
/// # Errors
///
/// [`GitUrlError::NullOrEmpty`] for an empty URL, [`GitUrlError::Format`]
/// when neither pattern matches.
pub fn repo_owner_and_name(
    git_remote_origin_url: &str,
) -> Result<GitRepoCoordinates, GitUrlError> {
    if git_remote_origin_url.is_empty() {
        return Err(GitUrlError::NullOrEmpty);
    }

    [ssh_pattern(), http_pattern()]
        .into_iter()
        .flatten()
        .find_map(|pattern| pattern.captures(git_remote_origin_url))
        .as_ref()
        .and_then(coordinates)
        .ok_or_else(|| GitUrlError::Format {
            url: git_remote_origin_url.to_owned(),
            patterns: expected_url_patterns(),
        })
}

pub fn repo_owner(git_remote_origin_url: &str) -> Result<String, GitUrlError> {
    repo_owner_and_name(git_remote_origin_url).map(|c| c.owner)
}

pub fn repo_name(git_remote_origin_url: &str) -> Result<String, GitUrlError> {
    repo_owner_and_name(git_remote_origin_url).map(|c| c.repo)
}

/// Canonical `https://github.com/{owner}/{repo}` URL for a remote.
///
/// The host is always `github.com`, including for `github.ibm.com` remotes.
pub fn build_github_repo_url(git_remote_origin_url: &str) -> Result<String, GitUrlError> {
    let GitRepoCoordinates { owner, repo } = repo_owner_and_name(git_remote_origin_url)?;
    Ok(format!("{GITHUB_BASE_URL}/{owner}/{repo}"))
}
