//! API and web roots derived from the configured hosting base URL.

use url::Url;

use crate::domain::{AppError, RepositoryName};

/// Public GitHub host; every other host is treated as GitHub Enterprise.
pub const PUBLIC_HOST: &str = "github.com";
const PUBLIC_API_ROOT: &str = "https://api.github.com";

/// Where the hosting API and the git remotes live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUrls {
    host: String,
    api_root: Url,
    web_root: Url,
}

impl HostUrls {
    /// Parse a base URL such as `github.com`, `https://ghe.example.com` or
    /// `ghe.example.com:8443/anything`; only the host (and port) is kept.
    pub fn from_base_url(base_url: &str) -> Result<Self, AppError> {
        let host = extract_host(base_url)?;
        Self::from_host(&host)
    }

    fn from_host(host: &str) -> Result<Self, AppError> {
        let api_root = if host == PUBLIC_HOST {
            PUBLIC_API_ROOT.to_string()
        } else {
            format!("https://{}/api/v3", host)
        };
        let api_root = Url::parse(&api_root)
            .map_err(|e| AppError::invalid_config(format!("invalid API URL: {}", e)))?;
        let web_root = Url::parse(&format!("https://{}", host))
            .map_err(|e| AppError::invalid_config(format!("invalid web URL: {}", e)))?;

        Ok(Self { host: host.to_string(), api_root, web_root })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn web_root(&self) -> &Url {
        &self.web_root
    }

    /// Anonymous clone URL, e.g. `https://github.com/acme/api.git`.
    pub fn clone_url(&self, account: &str, repo: &RepositoryName) -> String {
        format!("{}/{}/{}.git", self.web_root.as_str().trim_end_matches('/'), account, repo)
    }

    /// Push URL with the token embedded as credentials.
    pub fn remote_url(&self, account: &str, repo: &RepositoryName, token: &str) -> String {
        format!("https://{}@{}/{}/{}.git", token, self.host, account, repo)
    }

    /// `remote_url` with the token masked, for log output.
    pub fn redacted_remote_url(&self, account: &str, repo: &RepositoryName) -> String {
        self.remote_url(account, repo, "********")
    }
}

fn extract_host(base_url: &str) -> Result<String, AppError> {
    let trimmed = base_url.trim();
    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate).map_err(|e| {
        AppError::invalid_config(format!("invalid base URL '{}' (--base-url): {}", base_url, e))
    })?;

    let host = parsed.host_str().filter(|h| !h.is_empty()).ok_or_else(|| {
        AppError::invalid_config(format!("invalid base URL '{}' (--base-url)", base_url))
    })?;

    Ok(match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
