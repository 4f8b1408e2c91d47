//! The error taxonomy for git-glance.
//!
//! Every fallible path in the crate returns one of these variants; nothing is
//! retried and no layer swallows an error. `main` maps each variant to a
//! one-line message and a process exit code via [`Error::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No `.git` entry found walking up from the starting directory.
    #[error("not inside a git repository (no .git found walking up from {})", .0.display())]
    NotAGitRepository(PathBuf),

    /// The git config exists but has no `[remote "origin"]` url.
    #[error("no [remote \"origin\"] url in {}", .0.display())]
    NoOriginRemote(PathBuf),

    /// The origin url matched none of the recognized remote URL forms.
    #[error("unrecognized remote URL: '{0}'")]
    MalformedRemoteUrl(String),

    /// HTTP 429 from the hosting service.
    #[error("{service} error: Rate limit reached, please wait before trying again.")]
    RateLimited { service: &'static str },

    /// HTTP 401 from the hosting service.
    #[error("{service} error: Unauthorized. Check your API token and try again.")]
    Unauthorized { service: &'static str },

    /// HTTP 404 while resolving the project namespace.
    #[error("{service} error: Namespace '{namespace}' not found, couldn't fetch data.")]
    NamespaceNotFound {
        service: &'static str,
        namespace: String,
    },

    /// Any other non-success status, transport failure, or malformed body.
    #[error("{service} error: {message}")]
    ServiceError {
        service: &'static str,
        message: String,
    },

    /// The selected service family is declared but has no implementation.
    #[error("{service} support is not yet implemented. Use another service type.")]
    Unsupported { service: &'static str },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The process exit code for this error. Codes are part of the CLI
    /// contract: scripts distinguish rate limiting (2), bad credentials (3)
    /// and a missing namespace (4) from generic failure (1).
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Unsupported { .. } => 0,
            Error::RateLimited { .. } => 2,
            Error::Unauthorized { .. } => 3,
            Error::NamespaceNotFound { .. } => 4,
            _ => 1,
        }
    }
}
