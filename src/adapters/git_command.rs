use std::path::Path;
use std::process::{Command, Stdio};

use git2::{Repository, StatusOptions};

use crate::domain::AppError;
use crate::ports::GitPort;

/// `GitPort` backed by the `git` executable, with libgit2 for read-only inspection.
#[derive(Debug, Clone, Default)]
pub struct GitCommandAdapter {
    stream_output: bool,
}

impl GitCommandAdapter {
    /// When `stream_output` is set, git's stdout/stderr go straight to the terminal.
    pub fn new(stream_output: bool) -> Self {
        Self { stream_output }
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd);
        let display = format!("git {}", args.join(" "));

        if self.stream_output {
            let status = command
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| AppError::GitError { command: display.clone(), details: e.to_string() })?;
            if !status.success() {
                return Err(AppError::GitError { command: display, details: status.to_string() });
            }
            return Ok(String::new());
        }

        let output = command
            .output()
            .map_err(|e| AppError::GitError { command: display.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                output.status.to_string()
            };
            return Err(AppError::GitError { command: display, details });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitPort for GitCommandAdapter {
    fn clone_repository(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        let parent = dest.parent().unwrap_or(Path::new("."));
        let dest_str = dest.to_str().ok_or_else(|| AppError::GitError {
            command: "git clone".to_string(),
            details: "Checkout path contains invalid unicode".to_string(),
        })?;
        self.run(&["clone", url, dest_str], parent)?;
        Ok(())
    }

    fn create_branch(&self, checkout: &Path, branch: &str) -> Result<(), AppError> {
        self.run(&["checkout", "-b", branch], checkout)?;
        Ok(())
    }

    fn has_changes(&self, checkout: &Path) -> Result<bool, AppError> {
        let repo = Repository::open(checkout).map_err(|e| AppError::GitError {
            command: "git2::Repository::open".to_string(),
            details: e.to_string(),
        })?;

        let mut options = StatusOptions::new();
        options.include_untracked(true).recurse_untracked_dirs(true).include_ignored(false);

        let statuses = repo.statuses(Some(&mut options)).map_err(|e| AppError::GitError {
            command: "git2::Repository::statuses".to_string(),
            details: e.to_string(),
        })?;
        Ok(!statuses.is_empty())
    }

    fn commit_all(&self, checkout: &Path, message: &str) -> Result<(), AppError> {
        self.run(&["add", "."], checkout)?;
        self.run(&["commit", "-m", message], checkout)?;
        Ok(())
    }

    fn set_remote_url(&self, checkout: &Path, remote: &str, url: &str) -> Result<(), AppError> {
        self.run(&["remote", "set-url", remote, url], checkout).map_err(|e| match e {
            // The URL carries the token; keep it out of error messages.
            AppError::GitError { details, .. } => AppError::GitError {
                command: format!("git remote set-url {} <redacted>", remote),
                details,
            },
            other => other,
        })?;
        Ok(())
    }

    fn push_branch(&self, checkout: &Path, remote: &str, branch: &str) -> Result<(), AppError> {
        self.run(&["push", remote, branch], checkout)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn git(args: &[&str], cwd: &Path) {
        let status = Command::new("git").args(args).current_dir(cwd).output().unwrap();
        assert!(status.status.success(), "git {:?} failed: {:?}", args, status);
    }

    fn configure_identity(root: &Path) {
        git(&["config", "user.name", "Test User"], root);
        git(&["config", "user.email", "test@example.com"], root);
    }

    /// Creates an origin repository with one commit and returns (tempdir, origin path).
    fn setup_origin() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let origin = temp_dir.path().join("origin");
        fs::create_dir_all(&origin).unwrap();
        git(&["init"], &origin);
        configure_identity(&origin);
        fs::write(origin.join("README.md"), "# origin").unwrap();
        git(&["add", "README.md"], &origin);
        git(&["commit", "-m", "Initial commit"], &origin);
        (temp_dir, origin)
    }

    fn clone_origin(temp_dir: &TempDir, origin: &Path) -> (GitCommandAdapter, PathBuf) {
        let adapter = GitCommandAdapter::new(false);
        let checkout = temp_dir.path().join("checkout");
        adapter.clone_repository(origin.to_str().unwrap(), &checkout).expect("clone");
        configure_identity(&checkout);
        (adapter, checkout)
    }

    #[test]
    fn test_clone_repository() {
        let (temp_dir, origin) = setup_origin();
        let (_adapter, checkout) = clone_origin(&temp_dir, &origin);
        assert!(checkout.join("README.md").exists());
    }

    #[test]
    fn test_clone_missing_origin_fails() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = GitCommandAdapter::new(false);
        let missing = temp_dir.path().join("missing");
        let err = adapter
            .clone_repository(missing.to_str().unwrap(), &temp_dir.path().join("checkout"))
            .unwrap_err();
        assert!(matches!(err, AppError::GitError { .. }));
    }

    #[test]
    fn test_create_branch() {
        let (temp_dir, origin) = setup_origin();
        let (adapter, checkout) = clone_origin(&temp_dir, &origin);
        adapter.create_branch(&checkout, "bpr-test").expect("branch");

        let out = Command::new("git")
            .args(["branch", "--show-current"])
            .current_dir(&checkout)
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "bpr-test");
    }

    #[test]
    fn test_has_changes_detects_untracked_files() {
        let (temp_dir, origin) = setup_origin();
        let (adapter, checkout) = clone_origin(&temp_dir, &origin);
        assert!(!adapter.has_changes(&checkout).unwrap());

        fs::create_dir_all(checkout.join("nested")).unwrap();
        fs::write(checkout.join("nested/new.txt"), "content").unwrap();
        assert!(adapter.has_changes(&checkout).unwrap());
    }

    #[test]
    fn test_commit_all() {
        let (temp_dir, origin) = setup_origin();
        let (adapter, checkout) = clone_origin(&temp_dir, &origin);
        fs::write(checkout.join("README.md"), "# changed").unwrap();
        fs::write(checkout.join("added.txt"), "new").unwrap();

        adapter.commit_all(&checkout, "Apply change").expect("commit");
        assert!(!adapter.has_changes(&checkout).unwrap());

        let out = Command::new("git")
            .args(["log", "-1", "--pretty=%s"])
            .current_dir(&checkout)
            .output()
            .unwrap();
        assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "Apply change");
    }

    #[test]
    fn test_commit_without_changes_fails() {
        let (temp_dir, origin) = setup_origin();
        let (adapter, checkout) = clone_origin(&temp_dir, &origin);
        assert!(adapter.commit_all(&checkout, "Nothing").is_err());
    }

    #[test]
    fn test_set_remote_url_and_push() {
        let (temp_dir, origin) = setup_origin();
        let bare = temp_dir.path().join("bare.git");
        git(&["clone", "--bare", origin.to_str().unwrap(), bare.to_str().unwrap()], temp_dir.path());

        let (adapter, checkout) = clone_origin(&temp_dir, &origin);
        adapter.set_remote_url(&checkout, "origin", bare.to_str().unwrap()).expect("set-url");
        adapter.create_branch(&checkout, "bpr-push").unwrap();
        fs::write(checkout.join("pushed.txt"), "x").unwrap();
        adapter.commit_all(&checkout, "Push me").unwrap();
        adapter.push_branch(&checkout, "origin", "bpr-push").expect("push");

        let out = Command::new("git")
            .args(["branch", "--list", "bpr-push"])
            .current_dir(&bare)
            .output()
            .unwrap();
        assert!(String::from_utf8_lossy(&out.stdout).contains("bpr-push"));
    }

    #[test]
    fn test_set_remote_url_error_hides_url() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = GitCommandAdapter::new(false);
        let err = adapter
            .set_remote_url(temp_dir.path(), "origin", "https://secret@example.com/a/b.git")
            .unwrap_err();
        assert!(!err.to_string().contains("secret"));
    }
}
