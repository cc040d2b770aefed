//! Shared error types for the services crate.

use thiserror::Error;

use flashcards_core::model::{DeckError, SessionSummaryError};
use storage::repository::StorageError;

/// Errors emitted by `DeckService`. Any of these is fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Transitions requested in a state that forbids them.
///
/// None of these change the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("card {index} has not been answered yet")]
    NotScored { index: usize },
    #[error("session already completed")]
    Completed,
    #[error("session is not finished yet")]
    NotFinished,
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
