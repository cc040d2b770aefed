use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use flashcards_core::Clock;
use flashcards_core::model::{Card, Deck, QuizSettings, Score, SessionSummary};

use super::effect::{AdvanceTicket, SessionEffect};
use super::progress::SessionProgress;
use super::shuffle::display_order;
use crate::error::SessionError;

//
// ─── TRANSITION RESULTS ────────────────────────────────────────────────────────
//

/// Observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Card `i` is shown and waiting for an answer.
    Presenting(usize),
    /// Card `i` has been answered; the feedback is showing.
    Scored(usize),
    Finished,
}

/// Feedback for one answered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub matched: bool,
    pub correct_answer: String,
}

/// Returned by `submit_answer`.
///
/// `effect` is only set by the submission that scored the card; repeated
/// submissions replay the original result without an effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub result: AnswerResult,
    pub effect: Option<SessionEffect>,
}

/// Returned by `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Finished(Score),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Presenting,
    Scored(AnswerResult),
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a deck, from the first card to the final score.
///
/// All transitions are synchronous. Timing of the auto-advance is left to the
/// caller through [`SessionEffect::ScheduleAdvance`].
pub struct QuizSession {
    deck: Arc<Deck>,
    settings: QuizSettings,
    clock: Clock,
    rng: StdRng,
    stage: Stage,
    current: usize,
    score: Score,
    selected: Option<String>,
    display_order: Vec<usize>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session on the first card with a freshly seeded option shuffle.
    #[must_use]
    pub fn new(deck: Arc<Deck>, settings: QuizSettings, clock: Clock) -> Self {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(deck, settings, clock, rng)
    }

    /// Start a session whose option order is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(deck: Arc<Deck>, settings: QuizSettings, clock: Clock, seed: u64) -> Self {
        Self::with_rng(deck, settings, clock, StdRng::seed_from_u64(seed))
    }

    fn with_rng(deck: Arc<Deck>, settings: QuizSettings, clock: Clock, mut rng: StdRng) -> Self {
        let option_count = deck.card(0).map_or(0, |card| card.options().len());
        let display_order = display_order(option_count, settings.shuffle_options(), &mut rng);
        let started_at = clock.now();
        debug!(cards = deck.len(), "session started");

        Self {
            deck,
            settings,
            clock,
            rng,
            stage: Stage::Presenting,
            current: 0,
            score: Score::default(),
            selected: None,
            display_order,
            started_at,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match self.stage {
            Stage::Presenting => SessionPhase::Presenting(self.current),
            Stage::Scored(_) => SessionPhase::Scored(self.current),
            Stage::Finished => SessionPhase::Finished,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.stage == Stage::Finished
    }

    /// Index of the card on screen. Stays on the last card once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_card(&self) -> &Card {
        &self.deck.cards()[self.current]
    }

    /// The current card's options in display order.
    #[must_use]
    pub fn displayed_options(&self) -> Vec<&str> {
        let card = self.current_card();
        self.display_order
            .iter()
            .filter_map(|&idx| card.option(idx))
            .collect()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Feedback for the current card, once it has been scored.
    #[must_use]
    pub fn last_result(&self) -> Option<&AnswerResult> {
        match &self.stage {
            Stage::Scored(result) => Some(result),
            Stage::Presenting | Stage::Finished => None,
        }
    }

    /// Running tally.
    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    /// The tally, once the last card has been completed.
    #[must_use]
    pub fn final_score(&self) -> Option<Score> {
        self.is_finished().then_some(self.score)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.deck.len(),
            position: self.current + 1,
            // Cards before `current` are scored; `current` is once it leaves Presenting.
            answered: self.current + usize::from(self.stage != Stage::Presenting),
            is_complete: self.is_finished(),
        }
    }

    /// Remember the user's pick for the current card.
    ///
    /// Returns `false` (and changes nothing) unless a card is waiting for an answer.
    pub fn select_option(&mut self, choice: impl Into<String>) -> bool {
        if self.stage != Stage::Presenting {
            return false;
        }
        self.selected = Some(choice.into());
        true
    }

    /// Score `choice` against the current card.
    ///
    /// The first call on a card counts it and asks for a scheduled advance.
    /// Further calls before `advance` return the same result and leave the
    /// score alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn submit_answer(&mut self, choice: &str) -> Result<Submission, SessionError> {
        match &self.stage {
            Stage::Finished => return Err(SessionError::Completed),
            Stage::Scored(result) => {
                debug!(card = self.current, "card already scored, ignoring resubmission");
                return Ok(Submission {
                    result: result.clone(),
                    effect: None,
                });
            }
            Stage::Presenting => {}
        }

        let card = &self.deck.cards()[self.current];
        let matched = card.matches_answer(choice);
        let result = AnswerResult {
            matched,
            correct_answer: card.answer().to_owned(),
        };
        self.score.record(matched);
        self.selected = Some(choice.to_owned());
        self.stage = Stage::Scored(result.clone());
        info!(
            card = self.current,
            matched,
            correct = self.score.correct,
            wrong = self.score.wrong,
            "answer scored"
        );

        Ok(Submission {
            result,
            effect: Some(SessionEffect::ScheduleAdvance {
                ticket: AdvanceTicket::new(self.current),
                delay: self.settings.feedback_delay(),
            }),
        })
    }

    /// Submit whatever is selected. No selection never matches.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn submit_selected(&mut self) -> Result<Submission, SessionError> {
        let choice = self.selected.clone().unwrap_or_default();
        self.submit_answer(&choice)
    }

    /// Move past the scored card: to the next card, or to `Finished` after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotScored` if the current card has no answer yet.
    /// Returns `SessionError::Completed` once the session is finished.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        match self.stage {
            Stage::Presenting => {
                return Err(SessionError::NotScored {
                    index: self.current,
                });
            }
            Stage::Finished => return Err(SessionError::Completed),
            Stage::Scored(_) => {}
        }

        let next = self.current + 1;
        if next < self.deck.len() {
            self.current = next;
            self.selected = None;
            let option_count = self.current_card().options().len();
            self.display_order =
                display_order(option_count, self.settings.shuffle_options(), &mut self.rng);
            self.stage = Stage::Presenting;
            debug!(card = next, "advanced to next card");
            return Ok(Advance::Next { index: next });
        }

        self.stage = Stage::Finished;
        self.completed_at = Some(self.clock.now());
        info!(
            correct = self.score.correct,
            wrong = self.score.wrong,
            "session finished"
        );
        Ok(Advance::Finished(self.score))
    }

    /// Timer entry point for [`SessionEffect::ScheduleAdvance`].
    ///
    /// Advances only if the ticket's card is still the scored one; otherwise
    /// the timer is stale and `None` is returned.
    pub fn advance_scheduled(&mut self, ticket: AdvanceTicket) -> Option<Advance> {
        if self.phase() != SessionPhase::Scored(ticket.card_index()) {
            debug!(
                card = ticket.card_index(),
                phase = ?self.phase(),
                "ignoring stale scheduled advance"
            );
            return None;
        }
        self.advance().ok()
    }

    /// Close a finished session and produce its summary.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotFinished` before the last card is completed.
    /// Returns `SessionError::Summary` if the tally is inconsistent.
    pub fn finish(self) -> Result<SessionSummary, SessionError> {
        let Some(completed_at) = self.completed_at.filter(|_| self.is_finished()) else {
            return Err(SessionError::NotFinished);
        };
        Ok(SessionSummary::new(
            self.deck.len(),
            self.score,
            self.started_at,
            completed_at,
        )?)
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("cards_len", &self.deck.len())
            .field("phase", &self.phase())
            .field("score", &self.score)
            .field("selected", &self.selected)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
