//! Locate the enclosing git project and resolve its remote identity.
//!
//! Walks up from the working directory to the repo root, reads the origin
//! remote out of `.git/config`, runs it through the remote URL parser, and
//! picks up the per-host API token. Filesystem reads only; no network.

use std::path::{Path, PathBuf};

use crate::core::errors::Error;
use crate::core::{remote, tokens};

/// Everything one invocation needs to talk to the hosting service.
/// Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Directory containing the `.git` entry.
    pub root_path: PathBuf,
    /// Slash-separated project path on the hosting server.
    pub namespace: String,
    /// Bare hostname of the hosting server.
    pub host: String,
    /// API token for `host`, if the token store has one.
    pub api_token: Option<String>,
    /// `https://{host}` — the prefix for all API calls.
    pub api_base: String,
    /// The origin URL exactly as configured, for diagnostics.
    pub remote_url: String,
}

/// Locate the project starting from `start`, using the default token store.
pub fn locate(start: &Path) -> Result<ProjectInfo, Error> {
    locate_with_store(start, &tokens::default_store_path())
}

/// Locate the project with an explicit token store path.
pub fn locate_with_store(start: &Path, token_store: &Path) -> Result<ProjectInfo, Error> {
    let root = find_repo_root(start)?;
    let url = read_origin_url(&root.join(".git").join("config"))?;
    let parsed = remote::parse(&url)?;
    let api_token = tokens::lookup(token_store, &parsed.host);

    Ok(ProjectInfo {
        root_path: root,
        namespace: parsed.namespace,
        host: parsed.host,
        api_token,
        api_base: parsed.api_base,
        remote_url: parsed.url,
    })
}

/// Walk up from `start` looking for a directory with a `.git` entry.
/// An explicit loop: hitting the filesystem root terminates cleanly instead
/// of recursing forever.
pub fn find_repo_root(start: &Path) -> Result<PathBuf, Error> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(".git").exists() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(Error::NotAGitRepository(start.to_path_buf()));
        }
    }
}

/// Read the `url` value from the `[remote "origin"]` section of a git config.
fn read_origin_url(config_path: &Path) -> Result<String, Error> {
    let content = std::fs::read_to_string(config_path)?;
    let mut in_origin = false;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_origin = line == "[remote \"origin\"]";
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            if line[..eq_pos].trim() == "url" {
                return Ok(line[eq_pos + 1..].trim().to_string());
            }
        }
    }

    Err(Error::NoOriginRemote(config_path.to_path_buf()))
}
