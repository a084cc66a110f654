use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ShellPort;

/// Runs commands through `sh -c`.
#[derive(Debug, Clone, Default)]
pub struct ShellCommandAdapter {
    stream_output: bool,
}

impl ShellCommandAdapter {
    pub fn new(stream_output: bool) -> Self {
        Self { stream_output }
    }
}

impl ShellPort for ShellCommandAdapter {
    fn run(&self, cwd: &Path, command: &str) -> Result<(), AppError> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd);

        if self.stream_output {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| AppError::ShellError {
                    command: command.to_string(),
                    details: e.to_string(),
                })?;
            if !status.success() {
                return Err(AppError::ShellError {
                    command: command.to_string(),
                    details: status.to_string(),
                });
            }
            return Ok(());
        }

        let output = cmd.output().map_err(|e| AppError::ShellError {
            command: command.to_string(),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ShellError {
                command: command.to_string(),
                details: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    format!("{}: {}", output.status, stderr)
                },
            });
        }

        Ok(())
    }
}
