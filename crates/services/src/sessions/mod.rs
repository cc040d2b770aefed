mod effect;
mod progress;
mod service;
mod shuffle;
mod workflow;

#[cfg(test)]
mod proptests;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use effect::{AdvanceTicket, SessionEffect};
pub use progress::SessionProgress;
pub use service::{Advance, AnswerResult, QuizSession, SessionPhase, Submission};
pub use shuffle::display_order;
pub use workflow::SessionLoopService;
