//! Run configuration domain models.

use std::fmt;
use std::path::PathBuf;

use super::branch_name::{DEFAULT_PR_BRANCH, expand_branch_name};
use super::host::HostUrls;
use crate::domain::{AppError, RepositoryName};

pub const DEFAULT_BASE_URL: &str = "github.com";
pub const DEFAULT_PR_TITLE: &str = "BPR: bulk PR changes";
pub const DEFAULT_PR_BODY: &str = "BPR: bulk PR changes";
pub const DEFAULT_COMMIT_MESSAGE: &str = "BPR: bulk PR changes";
pub const DEFAULT_PARALLEL: usize = 10;

/// Unvalidated run parameters as supplied by the CLI.
#[derive(Debug, Clone)]
pub struct RawRunConfig {
    pub token: String,
    pub account: String,
    pub command: String,
    pub repos: String,
    pub base_url: String,
    pub default_branch: Option<String>,
    pub pr_title: String,
    pub pr_body: String,
    pub pr_branch: String,
    pub commit_message: String,
    pub parallel: usize,
    pub dry_run: bool,
    pub interactive: bool,
    pub work_dir: Option<PathBuf>,
    pub stream_output: bool,
}

impl Default for RawRunConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            account: String::new(),
            command: String::new(),
            repos: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_branch: None,
            pr_title: DEFAULT_PR_TITLE.to_string(),
            pr_body: DEFAULT_PR_BODY.to_string(),
            pr_branch: DEFAULT_PR_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            parallel: DEFAULT_PARALLEL,
            dry_run: false,
            interactive: true,
            work_dir: None,
            stream_output: false,
        }
    }
}

impl RawRunConfig {
    /// Validate and freeze the configuration.
    ///
    /// The random PR branch placeholder is expanded here, so every repository
    /// of the run shares the same branch name.
    pub fn validate(self) -> Result<RunConfig, AppError> {
        let host = HostUrls::from_base_url(&self.base_url)?;

        require(&self.token, "missing GitHub token (--token or GITHUB_TOKEN)")?;
        require(&self.account, "missing organization name (--org)")?;
        require(&self.command, "missing exec command (--cmd)")?;
        require(&self.pr_title, "missing pull request title (--pr-title)")?;
        require(&self.pr_body, "missing pull request body (--pr-body)")?;
        require(&self.pr_branch, "missing pull request branch (--pr-branch)")?;
        require(&self.commit_message, "missing pull request commit message (--pr-commit-msg)")?;
        if self.parallel < 1 {
            return Err(AppError::invalid_config("invalid parallel value (--parallel)"));
        }

        let allow_list = Some(self.repos.trim().to_string()).filter(|r| !r.is_empty());
        let default_branch =
            self.default_branch.map(|b| b.trim().to_string()).filter(|b| !b.is_empty());
        let work_root = self.work_dir.unwrap_or_else(|| std::env::temp_dir().join("bpr"));

        Ok(RunConfig {
            host,
            account: self.account.trim().to_string(),
            token: self.token,
            command: self.command,
            allow_list,
            pr_branch: expand_branch_name(self.pr_branch.trim()),
            pr_title: self.pr_title,
            pr_body: self.pr_body,
            commit_message: self.commit_message,
            default_branch,
            max_concurrency: self.parallel,
            dry_run: self.dry_run,
            interactive: self.interactive,
            work_root,
            stream_output: self.stream_output,
        })
    }
}

fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_config(message));
    }
    Ok(())
}

/// Validated, immutable run parameters shared read-only by every task.
#[derive(Clone)]
pub struct RunConfig {
    pub host: HostUrls,
    /// Organization or user that owns the repositories.
    pub account: String,
    pub token: String,
    /// Shell command run inside each checkout.
    pub command: String,
    /// Raw comma-separated allow list; `None` selects every repository.
    pub allow_list: Option<String>,
    pub pr_branch: String,
    pub pr_title: String,
    pub pr_body: String,
    pub commit_message: String,
    /// Base branch override; the remote default is used when absent.
    pub default_branch: Option<String>,
    pub max_concurrency: usize,
    pub dry_run: bool,
    pub interactive: bool,
    /// Directory under which `<account>/<repo>` checkouts are created.
    pub work_root: PathBuf,
    /// Stream subprocess stdout/stderr instead of capturing it.
    pub stream_output: bool,
}

impl RunConfig {
    /// Checkout directory for `repo`; identical across runs.
    pub fn checkout_path(&self, repo: &RepositoryName) -> PathBuf {
        self.work_root.join(&self.account).join(repo.as_str())
    }

    /// `(name, value)` pairs describing the run, with the token masked.
    pub fn display_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("token", "********".to_string()),
            ("org", self.account.clone()),
            ("cmd", self.command.clone()),
            ("repos", self.allow_list.clone().unwrap_or_else(|| "all".to_string())),
            ("base-url", self.host.host().to_string()),
            ("default-branch", self.default_branch.clone().unwrap_or_else(|| "default".into())),
            ("pr-title", self.pr_title.clone()),
            ("pr-body", self.pr_body.clone()),
            ("pr-branch", self.pr_branch.clone()),
            ("pr-commit-msg", self.commit_message.clone()),
            ("dry", self.dry_run.to_string()),
            ("work-dir", self.work_root.display().to_string()),
        ]
    }
}

impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("host", &self.host)
            .field("account", &self.account)
            .field("token", &"[REDACTED]")
            .field("command", &self.command)
            .field("allow_list", &self.allow_list)
            .field("pr_branch", &self.pr_branch)
            .field("default_branch", &self.default_branch)
            .field("max_concurrency", &self.max_concurrency)
            .field("dry_run", &self.dry_run)
            .field("interactive", &self.interactive)
            .field("work_root", &self.work_root)
            .finish()
    }
}
