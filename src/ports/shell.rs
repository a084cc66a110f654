use std::path::Path;

use crate::domain::AppError;

/// Runs the user-supplied shell command.
pub trait ShellPort {
    /// Run `command` through the shell with `cwd` as working directory.
    ///
    /// Any non-zero exit is an error.
    fn run(&self, cwd: &Path, command: &str) -> Result<(), AppError>;
}
