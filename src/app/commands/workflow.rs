//! Per-repository workflow: clone, change, commit, push, open a pull request.
//!
//! States run strictly in order and the first failure ends the workflow. The
//! checkout directory is removed on every exit path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use crate::domain::{HostError, RepositoryName, RunConfig, WorkflowError, WorkflowResult};
use crate::ports::{GitPort, PullRequestRequest, RepositoryHost, ShellPort};

const ORIGIN: &str = "origin";

/// Run the full workflow for `repo` and report its outcome.
pub fn run_workflow<G, S, H>(
    config: &RunConfig,
    repo: &RepositoryName,
    git: &G,
    shell: &S,
    host: &H,
) -> WorkflowResult
where
    G: GitPort + ?Sized,
    S: ShellPort + ?Sized,
    H: RepositoryHost + ?Sized,
{
    let span = info_span!("workflow", repo = %repo);
    let _enter = span.enter();

    match execute_states(config, repo, git, shell, host) {
        Ok(pull_request_url) => {
            info!("Repository handled successfully");
            WorkflowResult::success(repo.clone(), pull_request_url)
        }
        Err(error) => WorkflowResult::failed(repo.clone(), error),
    }
}

fn execute_states<G, S, H>(
    config: &RunConfig,
    repo: &RepositoryName,
    git: &G,
    shell: &S,
    host: &H,
) -> Result<Option<String>, WorkflowError>
where
    G: GitPort + ?Sized,
    S: ShellPort + ?Sized,
    H: RepositoryHost + ?Sized,
{
    if !repo.is_path_safe() {
        return Err(WorkflowError::CloneFailed(format!(
            "repository name '{}' cannot be used as a directory name",
            repo
        )));
    }

    // Dropped when this function returns, whichever state it returns from.
    let checkout = Checkout::prepare(config.checkout_path(repo)).map_err(|e| {
        WorkflowError::CloneFailed(format!("failed to prepare checkout directory: {}", e))
    })?;
    let dir = checkout.path();

    let clone_url = config.host.clone_url(&config.account, repo);
    info!(dir = %dir.display(), url = %clone_url, "Cloning repository");
    git.clone_repository(&clone_url, dir)
        .map_err(|e| WorkflowError::CloneFailed(e.to_string()))?;

    info!(cmd = %config.command, "Executing command");
    shell.run(dir, &config.command).map_err(|e| WorkflowError::CommandFailed(e.to_string()))?;

    info!(branch = %config.pr_branch, "Creating branch");
    git.create_branch(dir, &config.pr_branch)
        .map_err(|e| WorkflowError::BranchFailed(e.to_string()))?;

    commit_changes(config, dir, git)?;

    let base = resolve_base_branch(config, repo, host)?;

    if config.dry_run {
        info!("Dry run enabled, skipping push and PR creation");
        return Ok(None);
    }

    if config.pr_branch == base {
        return Err(WorkflowError::PullRequestFailed(HostError::SameBranch(base).to_string()));
    }

    push_branch(config, repo, dir, git)?;

    let url = open_pull_request(config, repo, &base, host)?;
    Ok(Some(url))
}

fn commit_changes<G: GitPort + ?Sized>(
    config: &RunConfig,
    dir: &Path,
    git: &G,
) -> Result<(), WorkflowError> {
    let changed = git.has_changes(dir).map_err(|e| WorkflowError::CommitFailed(e.to_string()))?;
    if !changed {
        return Err(WorkflowError::CommitFailed("no changes to commit".to_string()));
    }

    info!(msg = %config.commit_message, "Committing changes");
    git.commit_all(dir, &config.commit_message)
        .map_err(|e| WorkflowError::CommitFailed(e.to_string()))
}

/// The configured override wins; the remote default is the fallback.
fn resolve_base_branch<H: RepositoryHost + ?Sized>(
    config: &RunConfig,
    repo: &RepositoryName,
    host: &H,
) -> Result<String, WorkflowError> {
    let remote = host.get_default_branch(&config.account, repo);

    let base = match (&config.default_branch, remote) {
        (Some(given), Ok(remote)) => {
            if *given != remote {
                warn!(given = %given, remote = %remote, "Given default is not same as remote default");
            }
            given.clone()
        }
        (Some(given), Err(error)) => {
            warn!(given = %given, error = %error, "Could not read remote default branch");
            given.clone()
        }
        (None, Ok(remote)) if !remote.trim().is_empty() => remote,
        (None, Ok(_)) => {
            return Err(WorkflowError::DefaultBranchUnresolved(
                "remote default branch is empty".to_string(),
            ));
        }
        (None, Err(error)) => {
            return Err(WorkflowError::DefaultBranchUnresolved(error.to_string()));
        }
    };

    info!(default = %base, "Using default branch");
    Ok(base)
}

fn push_branch<G: GitPort + ?Sized>(
    config: &RunConfig,
    repo: &RepositoryName,
    dir: &Path,
    git: &G,
) -> Result<(), WorkflowError> {
    info!(
        branch = %config.pr_branch,
        remote = %config.host.redacted_remote_url(&config.account, repo),
        "Pushing changes"
    );
    let remote_url = config.host.remote_url(&config.account, repo, &config.token);

    git.set_remote_url(dir, ORIGIN, &remote_url)
        .map_err(|e| WorkflowError::PushFailed(e.to_string()))?;
    git.push_branch(dir, ORIGIN, &config.pr_branch)
        .map_err(|e| WorkflowError::PushFailed(e.to_string()))
}

fn open_pull_request<H: RepositoryHost + ?Sized>(
    config: &RunConfig,
    repo: &RepositoryName,
    base: &str,
    host: &H,
) -> Result<String, WorkflowError> {
    let request = PullRequestRequest {
        title: config.pr_title.clone(),
        body: config.pr_body.clone(),
        head: config.pr_branch.clone(),
        base: base.to_string(),
    };
    info!(title = %request.title, head = %request.head, base = %request.base, "Creating pull request");

    let pr = host
        .create_pull_request(&config.account, repo, &request)
        .map_err(|e| WorkflowError::PullRequestFailed(e.to_string()))?;

    info!(url = %pr.url, number = pr.number, "Pull request created successfully");
    Ok(pr.url)
}

/// Exclusively owned checkout directory, removed on drop.
struct Checkout {
    path: PathBuf,
}

impl Checkout {
    /// Remove a stale directory left by an earlier run and make sure the parent exists.
    fn prepare(path: PathBuf) -> io::Result<Self> {
        if path.exists() {
            info!(dir = %path.display(), "Removing stale checkout");
            fs::remove_dir_all(&path)?;
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for Checkout {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        info!(dir = %self.path.display(), "Cleaning up repo directory");
        if let Err(error) = fs::remove_dir_all(&self.path) {
            warn!(dir = %self.path.display(), error = %error, "Failed to remove checkout");
        }
    }
}
