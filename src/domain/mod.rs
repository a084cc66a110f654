pub mod configuration;
pub mod error;
pub mod outcome;
pub mod repository;
pub mod selection;

pub use configuration::{HostUrls, RawRunConfig, RunConfig};
pub use error::{AppError, HostError, WorkflowError};
pub use outcome::{RunOutcome, RunSummary, WorkflowOutcome, WorkflowResult};
pub use repository::{AccountKind, PullRequest, RepositoryName};
pub use selection::select;
