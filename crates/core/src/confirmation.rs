//! Destructive-action confirmation.
//!
//! Commands that remove data ask a [`Confirmation`] before mutating. The
//! shell supplies a terminal implementation; [`FixedAnswer`] serves
//! automated contexts and tests.

/// Settings handed to a confirmation implementation when it is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfirmationConfig {
    /// Approve every request without asking.
    pub auto_approve: bool,
}

pub trait Confirmation {
    /// Asks whether the action described by `title`, `header` and `body`
    /// should go ahead. Blocks until an answer is available.
    fn confirm(&self, title: &str, header: &str, body: &str) -> bool;
}

/// Always gives the same answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirmation for FixedAnswer {
    fn confirm(&self, _title: &str, _header: &str, _body: &str) -> bool {
        self.0
    }
}
