#![forbid(unsafe_code)]

pub mod deck_service;
pub mod error;
pub mod sessions;

pub use flashcards_core::Clock;

pub use deck_service::DeckService;
pub use error::{DeckServiceError, SessionError};

pub use sessions::{
    Advance, AdvanceTicket, AnswerResult, QuizSession, SessionEffect, SessionLoopService,
    SessionPhase, SessionProgress, Submission,
};
