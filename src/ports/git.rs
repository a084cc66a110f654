use std::path::Path;

use crate::domain::AppError;

/// Git operations performed against a repository checkout.
pub trait GitPort {
    /// Clone `url` into `dest`. The parent of `dest` must exist.
    fn clone_repository(&self, url: &str, dest: &Path) -> Result<(), AppError>;

    /// Create `branch` from the current HEAD and switch to it.
    fn create_branch(&self, checkout: &Path, branch: &str) -> Result<(), AppError>;

    /// True when the working tree has staged, unstaged or untracked changes.
    fn has_changes(&self, checkout: &Path) -> Result<bool, AppError>;

    /// Stage every working-tree change and commit it with `message`.
    fn commit_all(&self, checkout: &Path, message: &str) -> Result<(), AppError>;

    /// Point `remote` at `url`.
    fn set_remote_url(&self, checkout: &Path, remote: &str, url: &str) -> Result<(), AppError>;

    /// Push `branch` to `remote`.
    fn push_branch(&self, checkout: &Path, remote: &str, branch: &str) -> Result<(), AppError>;
}
