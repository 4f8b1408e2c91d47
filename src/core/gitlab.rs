//! Fetch project and issue data from GitLab's REST API.
//!
//! Two endpoints, called in sequence:
//!
//!   GET /api/v4/projects/{url-encoded namespace}     → numeric project id
//!   GET /api/v4/projects/{id}/issues/{reference}     → the issue itself
//!
//! Authentication is the `PRIVATE-TOKEN` header; when no token is known the
//! header is omitted and the server's 401/404 flows through the normal
//! status mapping. Nothing is retried here — rate limits and transient
//! failures surface to the caller with their own exit codes.

use serde::Deserialize;

use crate::core::errors::Error;
use crate::core::project::ProjectInfo;
use crate::core::service::{GitService, Issue};

const SERVICE: &str = "GitLab";

pub struct GitLab;

#[derive(Debug, Deserialize)]
struct ProjectResponse {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct IssueResponse {
    title: String,
    // GitLab sends `"description": null` for issues with an empty body.
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    labels: Vec<String>,
}

impl GitService for GitLab {
    fn resolve_project_id(&self, info: &ProjectInfo) -> Result<u64, Error> {
        let url = format!(
            "{}/api/v4/projects/{}",
            info.api_base,
            encode_namespace(&info.namespace)
        );
        let response: ProjectResponse = get_json(&url, info)?;
        Ok(response.id)
    }

    fn fetch_issue(
        &self,
        info: &ProjectInfo,
        project_id: u64,
        reference: u64,
    ) -> Result<Issue, Error> {
        let url = format!(
            "{}/api/v4/projects/{}/issues/{}",
            info.api_base, project_id, reference
        );
        let response: IssueResponse = get_json(&url, info)?;
        Ok(Issue {
            reference,
            title: response.title,
            description: response.description.unwrap_or_default(),
            labels: response.labels,
        })
    }
}

fn get_json<T: serde::de::DeserializeOwned>(url: &str, info: &ProjectInfo) -> Result<T, Error> {
    let mut request = ureq::get(url).set("Content-Type", "application/json");
    if let Some(token) = info.api_token.as_deref() {
        request = request.set("PRIVATE-TOKEN", token);
    }

    match request.call() {
        Ok(response) => response.into_json().map_err(|err| Error::ServiceError {
            service: SERVICE,
            message: format!("unexpected response body: {}", err),
        }),
        Err(ureq::Error::Status(status, _)) => Err(status_error(status, &info.namespace)),
        Err(err) => Err(Error::ServiceError {
            service: SERVICE,
            message: err.to_string(),
        }),
    }
}

/// Map a non-200 status to the error taxonomy. 200 never reaches here.
fn status_error(status: u16, namespace: &str) -> Error {
    match status {
        429 => Error::RateLimited { service: SERVICE },
        401 => Error::Unauthorized { service: SERVICE },
        404 => Error::NamespaceNotFound {
            service: SERVICE,
            namespace: namespace.to_string(),
        },
        _ => Error::ServiceError {
            service: SERVICE,
            message: format!("unexpected HTTP status {}", status),
        },
    }
}

/// GitLab wants the namespace as a single path segment: `/` becomes `%2F`.
fn encode_namespace(namespace: &str) -> String {
    namespace.replace('/', "%2F")
}
