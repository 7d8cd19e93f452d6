/// Whether the command did its work or was called off by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// What a command reports back to the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub show_metrics: bool,
    pub exit: bool,
    pub outcome: Outcome,
}

impl CommandResult {
    #[must_use]
    pub fn completed(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            show_metrics: false,
            exit: false,
            outcome: Outcome::Completed,
        }
    }

    #[must_use]
    pub fn cancelled(feedback: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Cancelled,
            ..Self::completed(feedback)
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.outcome == Outcome::Cancelled
    }
}
