mod confirmation;
mod git;
mod repository_host;
mod shell;

pub use confirmation::ConfirmationPort;
pub use git::GitPort;
pub use repository_host::{PullRequestRequest, RepositoryHost};
pub use shell::ShellPort;
