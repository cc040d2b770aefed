use async_trait::async_trait;
use flashcards_core::model::{CardDraft, Deck, DeckError};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::json::JsonDeckFile;

/// Errors surfaced by deck sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("deck not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a card.
///
/// Mirrors the deck file layout so sources can deserialize without knowing
/// about domain validation; `into_draft` hands the raw values to the domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl CardRecord {
    #[must_use]
    pub fn into_draft(self) -> CardDraft {
        CardDraft {
            question: self.question,
            options: self.options,
            answer: self.answer,
        }
    }
}

/// Persisted shape of a deck: `{ "title": ..., "cards": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckRecord {
    #[serde(default)]
    pub title: Option<String>,
    pub cards: Vec<CardRecord>,
}

impl DeckRecord {
    /// Convert the record into a validated domain `Deck`.
    ///
    /// # Errors
    ///
    /// Returns `DeckError` if the deck is empty or any card fails validation.
    pub fn into_deck(self) -> Result<Deck, DeckError> {
        Deck::from_drafts(self.title, self.cards.into_iter().map(CardRecord::into_draft))
    }
}

/// Where a session's deck comes from.
#[async_trait]
pub trait DeckSource: Send + Sync {
    /// Read the raw deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the deck is missing, or other storage errors.
    async fn load_deck(&self) -> Result<DeckRecord, StorageError>;

    /// Human-readable origin used in logs and error messages.
    fn describe(&self) -> String;
}

/// In-memory deck source for tests and prototyping.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDeckSource {
    record: Option<DeckRecord>,
}

impl InMemoryDeckSource {
    #[must_use]
    pub fn new(record: DeckRecord) -> Self {
        Self {
            record: Some(record),
        }
    }

    /// A source with nothing to load.
    #[must_use]
    pub fn missing() -> Self {
        Self { record: None }
    }
}

#[async_trait]
impl DeckSource for InMemoryDeckSource {
    async fn load_deck(&self) -> Result<DeckRecord, StorageError> {
        self.record
            .clone()
            .ok_or_else(|| StorageError::NotFound(self.describe()))
    }

    fn describe(&self) -> String {
        "in-memory deck".to_string()
    }
}

/// Deck source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub decks: Arc<dyn DeckSource>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(record: DeckRecord) -> Self {
        Self {
            decks: Arc::new(InMemoryDeckSource::new(record)),
        }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        Self {
            decks: Arc::new(JsonDeckFile::new(path)),
        }
    }
}
