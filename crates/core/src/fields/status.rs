//! The closed set of stages an application moves through.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    #[default]
    ToApply,
    Applied,
    Screening,
    OnlineAssessment,
    HrInterview,
    TechnicalInterview,
    FinalInterview,
    Offer,
    Accepted,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 10] = [
        Status::ToApply,
        Status::Applied,
        Status::Screening,
        Status::OnlineAssessment,
        Status::HrInterview,
        Status::TechnicalInterview,
        Status::FinalInterview,
        Status::Offer,
        Status::Accepted,
        Status::Rejected,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToApply => "to-apply",
            Status::Applied => "applied",
            Status::Screening => "screening",
            Status::OnlineAssessment => "online-assessment",
            Status::HrInterview => "hr-interview",
            Status::TechnicalInterview => "technical-interview",
            Status::FinalInterview => "final-interview",
            Status::Offer => "offer",
            Status::Accepted => "accepted",
            Status::Rejected => "rejected",
        }
    }

    /// Parses user input, accepting underscores and any letter case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStatus`] if the normalized text names no stage.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = normalize(text);
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::InvalidStatus(text.trim().to_string()))
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Canonical spelling of user input: trimmed, lower-cased, underscores as hyphens.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().replace('_', "-").to_lowercase()
}

#[must_use]
pub fn message_constraints() -> String {
    format!(
        "Status should be one of: {}",
        Status::ALL.iter().map(|status| status.as_str()).join(", ")
    )
}
