//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::app::api;
use crate::app::logging::{self, LogLevel};
use crate::domain::configuration::{
    DEFAULT_BASE_URL, DEFAULT_COMMIT_MESSAGE, DEFAULT_PARALLEL, DEFAULT_PR_BODY, DEFAULT_PR_BRANCH,
    DEFAULT_PR_TITLE,
};
use crate::domain::{AppError, RawRunConfig, RunConfig, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "bpr")]
#[command(version)]
#[command(
    about = "Run a command across an organization's repositories and open a pull request for each",
    long_about = None
)]
struct Cli {
    /// GitHub token with repo scope
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Organization or user that owns the repositories
    #[arg(long)]
    org: Option<String>,
    /// Shell command executed inside each cloned repository
    #[arg(long)]
    cmd: Option<String>,
    /// Comma-separated allow list of repository names
    #[arg(long, default_value = "")]
    repos: String,
    /// GitHub host; anything other than github.com is treated as GitHub Enterprise
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Base branch for the pull requests (defaults to each repository's default branch)
    #[arg(long)]
    default_branch: Option<String>,
    /// Pull request title
    #[arg(long, default_value = DEFAULT_PR_TITLE)]
    pr_title: String,
    /// Pull request body
    #[arg(long, default_value = DEFAULT_PR_BODY)]
    pr_body: String,
    /// Branch to create; `<random>` is replaced with a random suffix
    #[arg(long, default_value = DEFAULT_PR_BRANCH)]
    pr_branch: String,
    /// Commit message
    #[arg(long, default_value = DEFAULT_COMMIT_MESSAGE)]
    pr_commit_msg: String,
    /// Maximum number of repositories processed at once
    #[arg(long, default_value_t = DEFAULT_PARALLEL)]
    parallel: usize,
    /// Commit locally but skip push and pull request creation
    #[arg(long)]
    dry: bool,
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
    /// Directory for checkouts (defaults to $TMPDIR/bpr)
    #[arg(long)]
    work_dir: Option<PathBuf>,
    /// Log verbosity; debug also streams git and command output
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    fn into_raw_config(self) -> RawRunConfig {
        RawRunConfig {
            token: self.token.unwrap_or_default(),
            account: self.org.unwrap_or_default(),
            command: self.cmd.unwrap_or_default(),
            repos: self.repos,
            base_url: self.base_url,
            default_branch: self.default_branch,
            pr_title: self.pr_title,
            pr_body: self.pr_body,
            pr_branch: self.pr_branch,
            commit_message: self.pr_commit_msg,
            parallel: self.parallel,
            dry_run: self.dry,
            interactive: !self.yes,
            work_dir: self.work_dir,
            stream_output: self.log_level.is_debug(),
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn execute(cli: Cli) -> Result<i32, AppError> {
    let config = cli.into_raw_config().validate()?;
    log_configuration(&config);

    let outcome = api::run(config)?;
    Ok(exit_code(&outcome))
}

fn log_configuration(config: &RunConfig) {
    for (name, value) in config.display_entries() {
        info!(flag = name, value = %value, "Configuration");
    }
}

/// Non-zero when any repository failed.
fn exit_code(outcome: &RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Completed(summary) if summary.failed() > 0 => 1,
        _ => 0,
    }
}
