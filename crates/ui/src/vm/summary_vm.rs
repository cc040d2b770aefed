use flashcards_core::model::SessionSummary;

use crate::vm::time_fmt::{format_datetime, format_elapsed};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub accuracy_percent: u32,
    pub completed_at_str: String,
    pub elapsed_str: String,
}

impl SummaryVm {
    #[must_use]
    pub fn headline(&self) -> String {
        format!("You got {} correct and {} wrong!", self.correct, self.wrong)
    }
}

impl From<&SessionSummary> for SummaryVm {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            total: summary.total_cards(),
            correct: summary.correct(),
            wrong: summary.wrong(),
            accuracy_percent: summary.accuracy_percent(),
            completed_at_str: format_datetime(summary.completed_at()),
            elapsed_str: format_elapsed(summary.started_at(), summary.completed_at()),
        }
    }
}
