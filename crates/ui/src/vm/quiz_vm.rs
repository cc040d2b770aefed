use flashcards_core::model::{Score, SessionSummary};
use services::{
    AdvanceTicket, AnswerResult, QuizSession, SessionEffect, SessionError, SessionLoopService,
    SessionPhase,
};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Advance(AdvanceTicket),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Schedule(SessionEffect),
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub message: String,
    pub correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "quiz-result quiz-result--correct"
        } else {
            "quiz-result quiz-result--wrong"
        }
    }
}

#[must_use]
pub fn feedback_for(result: &AnswerResult) -> FeedbackVm {
    let message = if result.matched {
        "🌷 Correct!".to_string()
    } else {
        format!("🌼 Wrong! The correct answer is “{}”", result.correct_answer)
    };
    FeedbackVm {
        message,
        correct: result.matched,
    }
}

/// Everything the quiz page renders for the current card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreen {
    pub question: String,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub score: Score,
    pub progress_label: String,
    pub progress_percent: usize,
    pub can_submit: bool,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.session.score()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        let selected = self.session.selected_option();
        let options = self
            .session
            .displayed_options()
            .into_iter()
            .map(|text| OptionVm {
                text: text.to_string(),
                selected: selected == Some(text),
            })
            .collect();
        let progress = self.session.progress();

        QuizScreen {
            question: self.session.current_card().question().to_string(),
            options,
            feedback: self.session.last_result().map(feedback_for),
            score: self.session.score(),
            progress_label: format!("{} / {}", progress.position, progress.total),
            progress_percent: progress.percent_answered(),
            can_submit: matches!(self.session.phase(), SessionPhase::Presenting(_)),
        }
    }

    /// Apply one user or timer intent to the session.
    ///
    /// Selecting outside the presenting phase and late advance tickets are
    /// ignored and report `Continue`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::SessionClosed` if the session already finished.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(choice) => {
                self.session.select_option(choice);
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Submit => {
                let submission = self.session.submit_selected().map_err(view_error)?;
                Ok(submission
                    .effect
                    .map_or(QuizOutcome::Continue, QuizOutcome::Schedule))
            }
            QuizIntent::Advance(ticket) => {
                self.session.advance_scheduled(ticket);
                if self.session.is_finished() {
                    Ok(QuizOutcome::Completed)
                } else {
                    Ok(QuizOutcome::Continue)
                }
            }
        }
    }

    /// Close the session and hand back its summary.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session has not finished.
    pub fn finish(self) -> Result<SessionSummary, ViewError> {
        self.session.finish().map_err(view_error)
    }
}

fn view_error(err: SessionError) -> ViewError {
    match err {
        SessionError::Completed => ViewError::SessionClosed,
        _ => ViewError::Unknown,
    }
}

#[must_use]
pub fn start_quiz(session_loop: &SessionLoopService) -> QuizVm {
    QuizVm::new(session_loop.start_session())
}
