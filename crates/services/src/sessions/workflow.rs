use std::sync::Arc;

use flashcards_core::model::{Deck, QuizSettings};

use crate::deck_service::DeckService;
use crate::error::DeckServiceError;
use crate::Clock;

use super::service::QuizSession;

/// Hands out sessions over the deck loaded at startup.
#[derive(Clone, Debug)]
pub struct SessionLoopService {
    clock: Clock,
    deck: Arc<Deck>,
    settings: QuizSettings,
    seed: Option<u64>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(clock: Clock, deck: Arc<Deck>, settings: QuizSettings) -> Self {
        Self {
            clock,
            deck,
            settings,
            seed: None,
        }
    }

    /// Load the deck through `decks` and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError` if the deck cannot be read or is invalid.
    pub async fn load(
        clock: Clock,
        decks: &DeckService,
        settings: QuizSettings,
    ) -> Result<Self, DeckServiceError> {
        let deck = decks.load_deck().await?;
        Ok(Self::new(clock, deck, settings))
    }

    /// Make option shuffling reproducible; used by tests and demos.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn deck(&self) -> Arc<Deck> {
        Arc::clone(&self.deck)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Start a new session on the first card.
    #[must_use]
    pub fn start_session(&self) -> QuizSession {
        let deck = Arc::clone(&self.deck);
        match self.seed {
            Some(seed) => QuizSession::with_seed(deck, self.settings, self.clock, seed),
            None => QuizSession::new(deck, self.settings, self.clock),
        }
    }
}
