use crate::domain::AppError;

/// Yes/no question asked before any repository is modified.
pub trait ConfirmationPort {
    /// `Ok(true)` only on an explicit yes.
    fn confirm(&self, question: &str) -> Result<bool, AppError>;
}
