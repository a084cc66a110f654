//! Resolve the account kind and list every repository it owns.

use tracing::{debug, info};

use crate::domain::{AppError, RepositoryName};
use crate::ports::RepositoryHost;

/// Full repository listing for `account`, organization or user.
pub fn discover<H>(host: &H, account: &str) -> Result<Vec<RepositoryName>, AppError>
where
    H: RepositoryHost + ?Sized,
{
    info!(org = account, "Fetching repositories");

    let discovery_error =
        |source| AppError::Discovery { account: account.to_string(), source };

    let kind = host.resolve_account_kind(account).map_err(discovery_error)?;
    debug!(kind = kind.as_str(), "Resolved account kind");

    let repositories = host.list_repositories(account, kind).map_err(discovery_error)?;
    info!(count = repositories.len(), "Fetched repositories");

    Ok(repositories)
}
