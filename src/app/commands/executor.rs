//! Bounded-concurrency executor for per-repository workflows.
//!
//! At most `max_concurrency` workflows hold a token at any moment. Tokens are
//! handed out in the order repositories were selected and returned when a
//! workflow finishes, whatever its outcome. The call returns only after every
//! dispatched workflow has finished.

use std::sync::Arc;

use futures::future::join_all;
use tokio::runtime::Builder;
use tokio::sync::Semaphore;
use tracing::{debug, error};

use crate::domain::{AppError, RepositoryName, WorkflowError, WorkflowResult};

/// Run `task` for every repository with at most `max_concurrency` in flight.
///
/// Results come back in dispatch order. A panicking task fails only its own
/// repository.
pub fn execute<F>(
    repositories: Vec<RepositoryName>,
    max_concurrency: usize,
    task: F,
) -> Result<Vec<WorkflowResult>, AppError>
where
    F: Fn(&RepositoryName) -> WorkflowResult + Send + Sync + 'static,
{
    if repositories.is_empty() {
        return Ok(Vec::new());
    }

    let max_concurrency = max_concurrency.max(1);
    let runtime = Builder::new_multi_thread()
        .max_blocking_threads(max_concurrency)
        .thread_name("bpr-worker")
        .build()
        .map_err(|e| AppError::Runtime(e.to_string()))?;

    runtime.block_on(dispatch(repositories, max_concurrency, Arc::new(task)))
}

async fn dispatch<F>(
    repositories: Vec<RepositoryName>,
    max_concurrency: usize,
    task: Arc<F>,
) -> Result<Vec<WorkflowResult>, AppError>
where
    F: Fn(&RepositoryName) -> WorkflowResult + Send + Sync + 'static,
{
    let tokens = Arc::new(Semaphore::new(max_concurrency));
    let mut names = Vec::with_capacity(repositories.len());
    let mut handles = Vec::with_capacity(repositories.len());

    for repo in repositories {
        // Waits here until a running workflow hands its token back.
        let token = Arc::clone(&tokens)
            .acquire_owned()
            .await
            .map_err(|e| AppError::Runtime(e.to_string()))?;
        debug!(repo = %repo, "Dispatching workflow");

        let task = Arc::clone(&task);
        let job_repo = repo.clone();
        names.push(repo.clone());
        handles.push(tokio::spawn(async move {
            let _token = token;
            let result = match tokio::task::spawn_blocking(move || task(&job_repo)).await {
                Ok(result) => result,
                Err(join_error) => {
                    WorkflowResult::failed(repo, WorkflowError::Aborted(join_error.to_string()))
                }
            };
            if let Some(failure) = result.error() {
                error!(
                    repo = %result.repository,
                    reason = failure.tag(),
                    error = %failure,
                    "Failed to handle repository"
                );
            }
            result
        }));
    }

    let results = join_all(handles)
        .await
        .into_iter()
        .zip(names)
        .map(|(joined, repo)| {
            joined.unwrap_or_else(|e| {
                WorkflowResult::failed(repo, WorkflowError::Aborted(e.to_string()))
            })
        })
        .collect();

    Ok(results)
}
