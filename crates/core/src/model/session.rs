use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("too many cards for a single session: {len}")]
    TooManyCards { len: usize },

    #[error("total cards ({total}) does not match scored answers ({sum})")]
    CountMismatch { total: u32, sum: u32 },
}

/// Running tally of answers in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    #[must_use]
    pub fn new(correct: u32, wrong: u32) -> Self {
        Self { correct, wrong }
    }

    /// Count one answer.
    pub fn record(&mut self, matched: bool) {
        if matched {
            self.correct = self.correct.saturating_add(1);
        } else {
            self.wrong = self.wrong.saturating_add(1);
        }
    }

    /// Number of answers counted so far.
    #[must_use]
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }
}

/// Outcome of a completed quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    total_cards: u32,
    score: Score,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::TooManyCards` if `total_cards` cannot fit in `u32`.
    /// Returns `SessionSummaryError::CountMismatch` unless every card was scored exactly once.
    pub fn new(
        total_cards: usize,
        score: Score,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        let total = u32::try_from(total_cards)
            .map_err(|_| SessionSummaryError::TooManyCards { len: total_cards })?;
        let sum = score.answered();
        if sum != total {
            return Err(SessionSummaryError::CountMismatch { total, sum });
        }

        Ok(Self {
            total_cards: total,
            score,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total_cards(&self) -> u32 {
        self.total_cards
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.score.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.score.wrong
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Share of correct answers, rounded down to a whole percent.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_cards == 0 {
            return 0;
        }
        let pct = u64::from(self.score.correct) * 100 / u64::from(self.total_cards);
        u32::try_from(pct).unwrap_or(100)
    }
}
