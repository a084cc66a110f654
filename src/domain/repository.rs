use std::fmt;

use serde::Deserialize;

/// Name of a repository, unique within its owner's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the name can be used as a single directory component.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self.0 != "."
            && self.0 != ".."
            && !self.0.contains(['/', '\\'])
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepositoryName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RepositoryName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The two mutually exclusive namespaces a repository owner can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Organization,
    User,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Organization => "organization",
            AccountKind::User => "user",
        }
    }
}

/// A pull request opened on the remote host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub number: u64,
    pub url: String,
}
