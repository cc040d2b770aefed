use std::time::Duration;

/// Identifies which scored card a scheduled advance belongs to.
///
/// A ticket only advances the session while that card is still the scored
/// one, so a timer that fires late is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    card_index: usize,
}

impl AdvanceTicket {
    pub(crate) fn new(card_index: usize) -> Self {
        Self { card_index }
    }

    #[must_use]
    pub fn card_index(&self) -> usize {
        self.card_index
    }
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Keep the feedback visible for `delay`, then hand `ticket` back to
    /// `QuizSession::advance_scheduled`.
    ScheduleAdvance {
        ticket: AdvanceTicket,
        delay: Duration,
    },
}
