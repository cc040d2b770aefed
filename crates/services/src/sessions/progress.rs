/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// 1-based position of the card on screen.
    pub position: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Answered cards as a whole percentage of the deck.
    #[must_use]
    pub fn percent_answered(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.answered.min(self.total) * 100 / self.total
    }
}
