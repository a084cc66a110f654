//! GitHub REST API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, HeaderMap, LINK};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AccountKind, AppError, HostError, PullRequest, RepositoryName, RunConfig};
use crate::ports::{PullRequestRequest, RepositoryHost};

const GITHUB_JSON: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("bpr/", env!("CARGO_PKG_VERSION"));
const PER_PAGE: &str = "100";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the GitHub (or GitHub Enterprise) REST API.
#[derive(Clone)]
pub struct GitHubHttpClient {
    token: String,
    api_root: Url,
    client: Client,
}

impl std::fmt::Debug for GitHubHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubHttpClient")
            .field("api_root", &self.api_root)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GitHubHttpClient {
    /// Create a client for `api_root` (e.g. `https://api.github.com`).
    pub fn new(token: String, api_root: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Runtime(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, api_root, client })
    }

    /// Create a client from the run configuration's host and token.
    pub fn from_config(config: &RunConfig) -> Result<Self, AppError> {
        Self::new(config.token.clone(), config.host.api_root().clone())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, HostError> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| HostError::Transport(format!("API root cannot be a base: {}", self.api_root)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, API_VERSION)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, HostError> {
        self.authorized(request).send().map_err(|e| HostError::Transport(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct RepositoryEntry {
    name: RepositoryName,
}

#[derive(Debug, Deserialize)]
struct RepositoryDetail {
    #[serde(default)]
    default_branch: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreatePullRequestBody<'a> {
    title: &'a str,
    body: &'a str,
    head: &'a str,
    base: &'a str,
}

#[derive(Debug, Deserialize)]
struct PullRequestResponse {
    number: u64,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl RepositoryHost for GitHubHttpClient {
    fn resolve_account_kind(&self, account: &str) -> Result<AccountKind, HostError> {
        let url = self.endpoint(&["orgs", account])?;
        let response = self.send(self.client.get(url))?;

        match response.status() {
            status if status.is_success() => Ok(AccountKind::Organization),
            StatusCode::NOT_FOUND => Ok(AccountKind::User),
            _ => Err(api_error(response)),
        }
    }

    fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
    ) -> Result<Vec<RepositoryName>, HostError> {
        let collection = match kind {
            AccountKind::Organization => "orgs",
            AccountKind::User => "users",
        };
        let mut url = self.endpoint(&[collection, account, "repos"])?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);

        let mut names = Vec::new();
        loop {
            let response = self.send(self.client.get(url.clone()))?;
            if !response.status().is_success() {
                return Err(api_error(response));
            }

            let next = next_page_url(response.headers());
            let page: Vec<RepositoryEntry> =
                response.json().map_err(|e| HostError::InvalidResponse {
                    what: "repository list".to_string(),
                    details: e.to_string(),
                })?;
            names.extend(page.into_iter().map(|entry| entry.name));

            match next {
                Some(next) if next != url => url = next,
                _ => break,
            }
        }

        Ok(names)
    }

    fn get_default_branch(
        &self,
        account: &str,
        repo: &RepositoryName,
    ) -> Result<String, HostError> {
        let url = self.endpoint(&["repos", account, repo.as_str()])?;
        let response = self.send(self.client.get(url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(HostError::NotFound(format!("repository {}/{}", account, repo)));
        }
        if !response.status().is_success() {
            return Err(api_error(response));
        }

        let detail: RepositoryDetail = response.json().map_err(|e| HostError::InvalidResponse {
            what: "repository metadata".to_string(),
            details: e.to_string(),
        })?;

        detail
            .default_branch
            .filter(|branch| !branch.is_empty())
            .ok_or_else(|| HostError::NotFound(format!("default branch of {}/{}", account, repo)))
    }

    fn create_pull_request(
        &self,
        account: &str,
        repo: &RepositoryName,
        request: &PullRequestRequest,
    ) -> Result<PullRequest, HostError> {
        if request.head == request.base {
            return Err(HostError::SameBranch(request.head.clone()));
        }

        let url = self.endpoint(&["repos", account, repo.as_str(), "pulls"])?;
        let body = CreatePullRequestBody {
            title: &request.title,
            body: &request.body,
            head: &request.head,
            base: &request.base,
        };
        let response = self.send(self.client.post(url).json(&body))?;

        if !response.status().is_success() {
            return Err(api_error(response));
        }

        let created: PullRequestResponse =
            response.json().map_err(|e| HostError::InvalidResponse {
                what: "pull request".to_string(),
                details: e.to_string(),
            })?;

        Ok(PullRequest { number: created.number, url: created.html_url })
    }
}

/// Turn a non-success response into `HostError::Api`, keeping GitHub's message.
fn api_error(response: Response) -> HostError {
    let status = response.status().as_u16();
    let text = response.text().unwrap_or_else(|_| "Unknown error".to_string());

    let message = match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => {
            let mut parts: Vec<String> = body.message.into_iter().collect();
            parts.extend(body.errors.into_iter().filter_map(|detail| detail.message));
            if parts.is_empty() { text } else { parts.join("; ") }
        }
        Err(_) if text.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => text,
    };

    HostError::Api { status, message }
}

/// Extract the `rel="next"` target from a `Link` header.
fn next_page_url(headers: &HeaderMap) -> Option<Url> {
    let link = headers.get(LINK)?.to_str().ok()?;

    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| param.trim() == "rel=\"next\"");
        if !is_next {
            return None;
        }
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}
