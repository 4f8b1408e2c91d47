//! Per-host API token lookup.
//!
//! Tokens live in an ini-style file at `~/.config/git/.tokens`, one section
//! per hostname:
//!
//! ```text
//! [gitlab.example.com]
//! api_token = "glpat-abc123"
//! ```
//!
//! A missing file, section, or key is not an error here — the service client
//! surfaces it as Unauthorized only when an API call actually needs the token.

use std::path::{Path, PathBuf};

/// The default token store location under the user's home directory.
pub fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".config")
        .join("git")
        .join(".tokens")
}

/// Look up the `api_token` value in the section named after `host`.
pub fn lookup(store_path: &Path, host: &str) -> Option<String> {
    let content = std::fs::read_to_string(store_path).ok()?;
    let mut in_host_section = false;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            in_host_section = line[1..line.len() - 1].trim() == host;
            continue;
        }
        if !in_host_section {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if key == "api_token" {
                let value = line[eq_pos + 1..].trim().trim_matches('"');
                return Some(value.to_string());
            }
        }
    }

    None
}
