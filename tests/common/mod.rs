//! Shared testing utilities for bpr CLI tests.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Isolated checkout root and a scrubbed environment for each CLI invocation.
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory passed as `--work-dir`.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `bpr` binary.
    ///
    /// `GITHUB_TOKEN` and `BPR_LOG` from the caller's environment never leak in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("bpr").expect("Failed to locate bpr binary");
        cmd.env_remove("GITHUB_TOKEN").env_remove("BPR_LOG").arg("--work-dir").arg(self.work_dir());
        cmd
    }

    /// `cli()` with every required flag already set.
    pub fn cli_with_required(&self) -> Command {
        let mut cmd = self.cli();
        cmd.args(["--token", "test-token", "--org", "acme", "--cmd", "touch CHANGED"]);
        cmd
    }
}
