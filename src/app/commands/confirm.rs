//! Interactive gate shown before any repository is modified.

use tracing::{info, warn};

use crate::domain::RepositoryName;
use crate::ports::ConfirmationPort;

pub const QUESTION: &str = "Are you sure you want to continue?";

/// Whether processing may start. Non-interactive runs always proceed.
///
/// Anything other than an explicit yes declines, including a prompt that
/// could not be shown or was interrupted.
pub fn gate<C>(interactive: bool, selected: &[RepositoryName], confirmation: &C) -> bool
where
    C: ConfirmationPort + ?Sized,
{
    if !interactive {
        return true;
    }

    info!(count = selected.len(), "About to open pull requests on the selected repositories");
    match confirmation.confirm(QUESTION) {
        Ok(true) => true,
        Ok(false) => {
            info!("Exiting without processing");
            false
        }
        Err(error) => {
            warn!(error = %error, "Exiting without processing");
            false
        }
    }
}
