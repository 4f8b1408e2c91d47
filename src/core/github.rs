//! GitHub service family: declared but not implemented.
//!
//! Selecting it reports "not yet implemented" and exits cleanly instead of
//! failing; see `Error::Unsupported` and the exit-code mapping in `main`.

use crate::core::errors::Error;
use crate::core::project::ProjectInfo;
use crate::core::service::{GitService, Issue};

const SERVICE: &str = "GitHub";

pub struct GitHub;

impl GitService for GitHub {
    fn resolve_project_id(&self, _info: &ProjectInfo) -> Result<u64, Error> {
        Err(Error::Unsupported { service: SERVICE })
    }

    fn fetch_issue(
        &self,
        _info: &ProjectInfo,
        _project_id: u64,
        _reference: u64,
    ) -> Result<Issue, Error> {
        Err(Error::Unsupported { service: SERVICE })
    }
}
