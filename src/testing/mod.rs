mod fake_confirmation;
mod fake_git;
mod fake_host;
mod fake_shell;

pub use fake_confirmation::FakeConfirmation;
pub use fake_git::{FakeGit, GitCall};
pub use fake_host::FakeHost;
pub use fake_shell::FakeShell;

use std::path::Path;

use crate::domain::{RawRunConfig, RunConfig};

/// Valid configuration rooted at `work_dir`, non-interactive.
pub fn test_config(work_dir: &Path) -> RunConfig {
    RawRunConfig {
        token: "test-token".to_string(),
        account: "test-org".to_string(),
        command: "touch CHANGED".to_string(),
        pr_branch: "bpr-test".to_string(),
        interactive: false,
        work_dir: Some(work_dir.to_path_buf()),
        ..RawRunConfig::default()
    }
    .validate()
    .expect("test config must be valid")
}
