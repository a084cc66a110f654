use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ShellPort;

/// Records each command run; fails for configured checkout directory names.
#[derive(Default)]
pub struct FakeShell {
    pub runs: Mutex<Vec<(PathBuf, String)>>,
    pub failing: Mutex<HashSet<String>>,
}

impl FakeShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(self, repo: &str) -> Self {
        self.failing.lock().unwrap().insert(repo.to_string());
        self
    }

    pub fn runs(&self) -> Vec<(PathBuf, String)> {
        self.runs.lock().unwrap().clone()
    }
}

impl ShellPort for FakeShell {
    fn run(&self, cwd: &Path, command: &str) -> Result<(), AppError> {
        self.runs.lock().unwrap().push((cwd.to_path_buf(), command.to_string()));

        let repo = cwd.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        if self.failing.lock().unwrap().contains(&repo) {
            return Err(AppError::ShellError {
                command: command.to_string(),
                details: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
