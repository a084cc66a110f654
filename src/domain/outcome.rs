use super::{RepositoryName, WorkflowError};

/// Final state of one repository's workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Every state ran. `pull_request_url` is `None` in dry runs.
    Success { pull_request_url: Option<String> },
    Failed(WorkflowError),
}

/// Produced once per repository and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowResult {
    pub repository: RepositoryName,
    pub outcome: WorkflowOutcome,
}

impl WorkflowResult {
    pub fn success(repository: RepositoryName, pull_request_url: Option<String>) -> Self {
        Self { repository, outcome: WorkflowOutcome::Success { pull_request_url } }
    }

    pub fn failed(repository: RepositoryName, error: WorkflowError) -> Self {
        Self { repository, outcome: WorkflowOutcome::Failed(error) }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, WorkflowOutcome::Success { .. })
    }

    pub fn error(&self) -> Option<&WorkflowError> {
        match &self.outcome {
            WorkflowOutcome::Failed(error) => Some(error),
            WorkflowOutcome::Success { .. } => None,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The allow list matched no discovered repository.
    NothingSelected,
    /// The confirmation gate was declined.
    Declined,
    /// Every selected repository was attempted.
    Completed(RunSummary),
}

/// Per-repository results of a completed run, in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub results: Vec<WorkflowResult>,
}

impl RunSummary {
    pub fn new(results: Vec<WorkflowResult>) -> Self {
        Self { results }
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&RepositoryName, &WorkflowError)> {
        self.results.iter().filter_map(|r| r.error().map(|e| (&r.repository, e)))
    }

    pub fn pull_request_urls(&self) -> impl Iterator<Item = (&RepositoryName, &str)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            WorkflowOutcome::Success { pull_request_url: Some(url) } => {
                Some((&r.repository, url.as_str()))
            }
            _ => None,
        })
    }
}
