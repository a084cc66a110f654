use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::GitPort;

/// One recorded git operation; `repo` is the checkout directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { repo: String, url: String },
    CreateBranch { repo: String, branch: String },
    Commit { repo: String, message: String },
    SetRemoteUrl { repo: String, url: String },
    Push { repo: String, branch: String },
}

impl GitCall {
    pub fn repo(&self) -> &str {
        match self {
            GitCall::Clone { repo, .. }
            | GitCall::CreateBranch { repo, .. }
            | GitCall::Commit { repo, .. }
            | GitCall::SetRemoteUrl { repo, .. }
            | GitCall::Push { repo, .. } => repo,
        }
    }
}

/// In-memory git that creates real checkout directories so cleanup is observable.
#[derive(Default)]
pub struct FakeGit {
    pub calls: Mutex<Vec<GitCall>>,
    pub fail_clone: Mutex<HashSet<String>>,
    pub fail_branch: Mutex<HashSet<String>>,
    pub fail_push: Mutex<HashSet<String>>,
    pub unchanged: Mutex<HashSet<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_clone(self, repo: &str) -> Self {
        self.fail_clone.lock().unwrap().insert(repo.to_string());
        self
    }

    pub fn failing_branch(self, repo: &str) -> Self {
        self.fail_branch.lock().unwrap().insert(repo.to_string());
        self
    }

    pub fn failing_push(self, repo: &str) -> Self {
        self.fail_push.lock().unwrap().insert(repo.to_string());
        self
    }

    /// The user command leaves this repository's working tree clean.
    pub fn without_changes(self, repo: &str) -> Self {
        self.unchanged.lock().unwrap().insert(repo.to_string());
        self
    }

    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, repo: &str) -> Vec<GitCall> {
        self.calls().into_iter().filter(|c| c.repo() == repo).collect()
    }

    pub fn pushes(&self) -> Vec<GitCall> {
        self.calls().into_iter().filter(|c| matches!(c, GitCall::Push { .. })).collect()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn fails(set: &Mutex<HashSet<String>>, repo: &str, command: &str) -> Result<(), AppError> {
        if set.lock().unwrap().contains(repo) {
            return Err(AppError::GitError {
                command: command.to_string(),
                details: format!("simulated failure for {}", repo),
            });
        }
        Ok(())
    }
}

fn repo_of(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

impl GitPort for FakeGit {
    fn clone_repository(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        let repo = repo_of(dest);
        self.record(GitCall::Clone { repo: repo.clone(), url: url.to_string() });
        // Partial clone: the directory exists even when the clone fails.
        fs::create_dir_all(dest)?;
        Self::fails(&self.fail_clone, &repo, "git clone")?;
        fs::write(dest.join("README.md"), "# fake")?;
        Ok(())
    }

    fn create_branch(&self, checkout: &Path, branch: &str) -> Result<(), AppError> {
        let repo = repo_of(checkout);
        self.record(GitCall::CreateBranch { repo: repo.clone(), branch: branch.to_string() });
        Self::fails(&self.fail_branch, &repo, "git checkout -b")
    }

    fn has_changes(&self, checkout: &Path) -> Result<bool, AppError> {
        Ok(!self.unchanged.lock().unwrap().contains(&repo_of(checkout)))
    }

    fn commit_all(&self, checkout: &Path, message: &str) -> Result<(), AppError> {
        self.record(GitCall::Commit { repo: repo_of(checkout), message: message.to_string() });
        Ok(())
    }

    fn set_remote_url(&self, checkout: &Path, _remote: &str, url: &str) -> Result<(), AppError> {
        self.record(GitCall::SetRemoteUrl { repo: repo_of(checkout), url: url.to_string() });
        Ok(())
    }

    fn push_branch(&self, checkout: &Path, _remote: &str, branch: &str) -> Result<(), AppError> {
        let repo = repo_of(checkout);
        self.record(GitCall::Push { repo: repo.clone(), branch: branch.to_string() });
        Self::fails(&self.fail_push, &repo, "git push")
    }
}
