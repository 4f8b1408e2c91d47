//! The capability trait over hosted git service families.
//!
//! One implementing type per family, picked once at startup from the
//! `--type` flag. Two capabilities: resolve the numeric project id for a
//! namespace, and fetch a single issue by its per-project reference.

use clap::ValueEnum;

use crate::core::errors::Error;
use crate::core::github::GitHub;
use crate::core::gitlab::GitLab;
use crate::core::project::ProjectInfo;

/// One issue, as fetched from a service.
///
/// Labels keep the order the service returned them in, duplicates included.
/// `reference` is the caller-supplied number, not re-read from the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub reference: u64,
    pub title: String,
    pub description: String,
    pub labels: Vec<String>,
}

pub trait GitService {
    /// Resolve the service-side numeric id for the project in `info`.
    fn resolve_project_id(&self, info: &ProjectInfo) -> Result<u64, Error>;

    /// Fetch one issue by its per-project reference number.
    fn fetch_issue(
        &self,
        info: &ProjectInfo,
        project_id: u64,
        reference: u64,
    ) -> Result<Issue, Error>;
}

/// The supported service families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceKind {
    /// GitLab REST API (implemented).
    Gitlab,
    /// GitHub (declared, not yet implemented).
    Github,
}

impl ServiceKind {
    pub fn client(self) -> Box<dyn GitService> {
        match self {
            ServiceKind::Gitlab => Box::new(GitLab),
            ServiceKind::Github => Box::new(GitHub),
        }
    }
}
