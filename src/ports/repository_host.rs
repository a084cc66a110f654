//! Remote repository host port definition.

use crate::domain::{AccountKind, HostError, PullRequest, RepositoryName};

/// Pull request to open on the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    pub title: String,
    pub body: String,
    /// Branch carrying the changes.
    pub head: String,
    /// Branch the changes merge into.
    pub base: String,
}

/// Port for the hosting API.
///
/// Listing endpoints differ between organizations and users, so callers
/// resolve the account kind first and pass it to `list_repositories`.
pub trait RepositoryHost {
    /// Probe whether `account` is an organization; a not-found answer means a user.
    fn resolve_account_kind(&self, account: &str) -> Result<AccountKind, HostError>;

    /// Every repository of `account`, all pages accumulated.
    fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
    ) -> Result<Vec<RepositoryName>, HostError>;

    /// The repository's default branch.
    fn get_default_branch(
        &self,
        account: &str,
        repo: &RepositoryName,
    ) -> Result<String, HostError>;

    /// Open a pull request. Fails with `SameBranch` when head equals base.
    fn create_pull_request(
        &self,
        account: &str,
        repo: &RepositoryName,
        request: &PullRequestRequest,
    ) -> Result<PullRequest, HostError>;
}
