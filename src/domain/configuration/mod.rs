pub mod branch_name;
pub mod host;
pub mod run_config;

pub use branch_name::{DEFAULT_PR_BRANCH, expand_branch_name};
pub use host::HostUrls;
pub use run_config::{
    DEFAULT_BASE_URL, DEFAULT_COMMIT_MESSAGE, DEFAULT_PARALLEL, DEFAULT_PR_BODY, DEFAULT_PR_TITLE,
    RawRunConfig, RunConfig,
};
