pub mod dialoguer_prompt;
pub mod git_command;
pub mod github_http;
pub mod shell_command;

pub use dialoguer_prompt::DialoguerConfirmation;
pub use git_command::GitCommandAdapter;
pub use github_http::GitHubHttpClient;
pub use shell_command::ShellCommandAdapter;
