use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ConfirmationPort;

/// Scripted answer to the confirmation prompt.
pub struct FakeConfirmation {
    answer: Result<bool, String>,
    pub questions: Mutex<Vec<String>>,
}

impl FakeConfirmation {
    pub fn answering(answer: bool) -> Self {
        Self { answer: Ok(answer), questions: Mutex::new(Vec::new()) }
    }

    /// The prompt itself fails, e.g. stdin is not a terminal.
    pub fn broken() -> Self {
        Self { answer: Err("not a terminal".to_string()), questions: Mutex::new(Vec::new()) }
    }

    pub fn times_asked(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

impl ConfirmationPort for FakeConfirmation {
    fn confirm(&self, question: &str) -> Result<bool, AppError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer.clone().map_err(AppError::Prompt)
    }
}
