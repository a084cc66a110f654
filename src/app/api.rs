//! API Facade for the application.
//!
//! Wires the concrete adapters into the run command.

use std::sync::Arc;

use crate::adapters::{
    DialoguerConfirmation, GitCommandAdapter, GitHubHttpClient, ShellCommandAdapter,
};
use crate::app::AppContext;
use crate::app::commands::{run, workflow};
use crate::domain::{RepositoryName, WorkflowError, WorkflowResult};

pub use crate::domain::{AppError, RunConfig, RunOutcome, RunSummary};

/// Discover, select, confirm and process repositories against the real host.
pub fn run(config: RunConfig) -> Result<RunOutcome, AppError> {
    let config = Arc::new(config);
    let host = GitHubHttpClient::from_config(&config)?;
    let ctx = AppContext::new(host, DialoguerConfirmation::new());

    let task_config = Arc::clone(&config);
    let task = move |repo: &RepositoryName| {
        // Each workflow owns its API client; nothing is shared across tasks.
        let host = match GitHubHttpClient::from_config(&task_config) {
            Ok(host) => host,
            Err(e) => {
                return WorkflowResult::failed(
                    repo.clone(),
                    WorkflowError::HostClientFailed(e.to_string()),
                );
            }
        };
        let git = GitCommandAdapter::new(task_config.stream_output);
        let shell = ShellCommandAdapter::new(task_config.stream_output);
        workflow::run_workflow(&task_config, repo, &git, &shell, &host)
    };

    run::execute(&ctx, &config, task)
}
