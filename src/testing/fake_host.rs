use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::{AccountKind, HostError, PullRequest, RepositoryName};
use crate::ports::{PullRequestRequest, RepositoryHost};

/// In-memory hosting API.
pub struct FakeHost {
    pub kind: Result<AccountKind, HostError>,
    pub repositories: Result<Vec<RepositoryName>, HostError>,
    pub default_branch: String,
    pub default_branch_overrides: HashMap<String, Result<String, HostError>>,
    pub rejected_pull_requests: HashSet<String>,
    pub pull_requests: Mutex<Vec<(String, PullRequestRequest)>>,
    pub listed: Mutex<Vec<(String, AccountKind)>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            kind: Ok(AccountKind::Organization),
            repositories: Ok(Vec::new()),
            default_branch: "main".to_string(),
            default_branch_overrides: HashMap::new(),
            rejected_pull_requests: HashSet::new(),
            pull_requests: Mutex::new(Vec::new()),
            listed: Mutex::new(Vec::new()),
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repositories(mut self, names: &[&str]) -> Self {
        self.repositories = Ok(names.iter().map(|n| RepositoryName::new(*n)).collect());
        self
    }

    pub fn with_default_branch_result(
        mut self,
        repo: &str,
        result: Result<String, HostError>,
    ) -> Self {
        self.default_branch_overrides.insert(repo.to_string(), result);
        self
    }

    pub fn rejecting_pull_request(mut self, repo: &str) -> Self {
        self.rejected_pull_requests.insert(repo.to_string());
        self
    }

    pub fn pull_requests(&self) -> Vec<(String, PullRequestRequest)> {
        self.pull_requests.lock().unwrap().clone()
    }

    pub fn listed(&self) -> Vec<(String, AccountKind)> {
        self.listed.lock().unwrap().clone()
    }
}

impl RepositoryHost for FakeHost {
    fn resolve_account_kind(&self, _account: &str) -> Result<AccountKind, HostError> {
        self.kind.clone()
    }

    fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
    ) -> Result<Vec<RepositoryName>, HostError> {
        self.listed.lock().unwrap().push((account.to_string(), kind));
        self.repositories.clone()
    }

    fn get_default_branch(
        &self,
        _account: &str,
        repo: &RepositoryName,
    ) -> Result<String, HostError> {
        match self.default_branch_overrides.get(repo.as_str()) {
            Some(result) => result.clone(),
            None => Ok(self.default_branch.clone()),
        }
    }

    fn create_pull_request(
        &self,
        _account: &str,
        repo: &RepositoryName,
        request: &PullRequestRequest,
    ) -> Result<PullRequest, HostError> {
        self.pull_requests.lock().unwrap().push((repo.to_string(), request.clone()));
        if request.head == request.base {
            return Err(HostError::SameBranch(request.head.clone()));
        }
        if self.rejected_pull_requests.contains(repo.as_str()) {
            return Err(HostError::Api { status: 422, message: "Validation Failed".to_string() });
        }

        let number = self.pull_requests.lock().unwrap().len() as u64;
        Ok(PullRequest { number, url: format!("https://example.com/{}/pull/{}", repo, number) })
    }
}
