use crate::ports::{ConfirmationPort, RepositoryHost};

/// Application context holding dependencies for a run.
pub struct AppContext<H: RepositoryHost, C: ConfirmationPort> {
    host: H,
    confirmation: C,
}

impl<H: RepositoryHost, C: ConfirmationPort> AppContext<H, C> {
    /// Create a new application context.
    pub fn new(host: H, confirmation: C) -> Self {
        Self { host, confirmation }
    }

    /// Hosting API used for discovery.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Prompt shown before processing starts.
    pub fn confirmation(&self) -> &C {
        &self.confirmation
    }
}
