use std::io;

use thiserror::Error;

/// Library-wide error type for bpr operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration rejected during validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Account resolution or repository listing failed.
    #[error("Failed to discover repositories for '{account}': {source}")]
    Discovery {
        account: String,
        #[source]
        source: HostError,
    },

    /// Remote hosting API failure outside of discovery.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// User shell command failed.
    #[error("Command '{command}' failed: {details}")]
    ShellError { command: String, details: String },

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Async runtime could not be started.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl AppError {
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidConfig(_) => io::ErrorKind::InvalidInput,
            AppError::Discovery { source, .. } | AppError::Host(source) => match source {
                HostError::NotFound(_) => io::ErrorKind::NotFound,
                _ => io::ErrorKind::Other,
            },
            AppError::GitError { .. }
            | AppError::ShellError { .. }
            | AppError::Prompt(_)
            | AppError::Runtime(_) => io::ErrorKind::Other,
        }
    }
}

/// Failure reported by the remote repository host.
///
/// Callers branch on the variant: `NotFound` is how "this name is not an
/// organization" is told apart from a genuine transport failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request never produced an HTTP response.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The host answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The host answered with a body that could not be understood.
    #[error("Failed to parse {what}: {details}")]
    InvalidResponse { what: String, details: String },

    /// Pull request head and base are the same branch.
    #[error("head branch ({0}) and base branch ({0}) cannot be the same")]
    SameBranch(String),
}

/// Terminal failure of one repository's workflow.
///
/// Each variant names the state the workflow stopped in and carries the
/// rendered cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("failed to clone repository: {0}")]
    CloneFailed(String),

    #[error("failed to execute command: {0}")]
    CommandFailed(String),

    #[error("failed to create branch: {0}")]
    BranchFailed(String),

    #[error("failed to commit changes: {0}")]
    CommitFailed(String),

    #[error("failed to resolve default branch: {0}")]
    DefaultBranchUnresolved(String),

    #[error("failed to push branch: {0}")]
    PushFailed(String),

    #[error("failed to create pull request: {0}")]
    PullRequestFailed(String),

    /// The per-task API client could not be constructed.
    #[error("failed to create API client: {0}")]
    HostClientFailed(String),

    /// The workflow panicked or its task was lost.
    #[error("workflow aborted: {0}")]
    Aborted(String),
}

impl WorkflowError {
    /// Stable tag used in log lines and summaries.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkflowError::CloneFailed(_) => "CloneFailed",
            WorkflowError::CommandFailed(_) => "CommandFailed",
            WorkflowError::BranchFailed(_) => "BranchFailed",
            WorkflowError::CommitFailed(_) => "CommitFailed",
            WorkflowError::DefaultBranchUnresolved(_) => "DefaultBranchUnresolved",
            WorkflowError::PushFailed(_) => "PushFailed",
            WorkflowError::PullRequestFailed(_) => "PullRequestFailed",
            WorkflowError::HostClientFailed(_) => "HostClientFailed",
            WorkflowError::Aborted(_) => "Aborted",
        }
    }
}
