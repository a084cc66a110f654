//! Top-level run: discover, select, confirm, execute, summarize.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::{confirm, discover, executor};
use crate::domain::{
    AppError, RepositoryName, RunConfig, RunOutcome, RunSummary, WorkflowResult, select,
};
use crate::ports::{ConfirmationPort, RepositoryHost};

/// Run the bulk pull request flow for every selected repository.
///
/// Discovery failures abort the run. Per-repository failures are collected
/// into the returned summary.
pub fn execute<H, C, F>(
    ctx: &AppContext<H, C>,
    config: &RunConfig,
    workflow: F,
) -> Result<RunOutcome, AppError>
where
    H: RepositoryHost,
    C: ConfirmationPort,
    F: Fn(&RepositoryName) -> WorkflowResult + Send + Sync + 'static,
{
    let discovered = discover::discover(ctx.host(), &config.account)?;
    let selected = select(&discovered, config.allow_list.as_deref().unwrap_or_default());

    if selected.is_empty() {
        info!("No repositories selected, nothing to do");
        return Ok(RunOutcome::NothingSelected);
    }

    for repo in &selected {
        info!(repo = %repo, "Selected");
    }

    if !confirm::gate(config.interactive, &selected, ctx.confirmation()) {
        return Ok(RunOutcome::Declined);
    }

    let results = executor::execute(selected, config.max_concurrency, workflow)?;
    let summary = RunSummary::new(results);
    report(&summary);

    Ok(RunOutcome::Completed(summary))
}

fn report(summary: &RunSummary) {
    for (repo, url) in summary.pull_request_urls() {
        info!(repo = %repo, url, "Pull request opened");
    }
    for (repo, error) in summary.failures() {
        info!(repo = %repo, reason = error.tag(), "Not processed");
    }
    info!(succeeded = summary.succeeded(), failed = summary.failed(), "Run finished");
    if summary.failed() > 0 {
        info!("Run with --log-level debug for more details");
    }
}
