use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::ConfirmationPort;

/// Terminal yes/no prompt.
#[derive(Debug, Clone, Default)]
pub struct DialoguerConfirmation;

impl DialoguerConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationPort for DialoguerConfirmation {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::Prompt(err.to_string()))?;

        // Esc / q yields None.
        Ok(answer.unwrap_or(false))
    }
}
