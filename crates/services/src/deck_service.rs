use std::sync::Arc;

use flashcards_core::model::Deck;
use storage::repository::DeckSource;
use tracing::{info, warn};

use crate::error::DeckServiceError;

/// Loads and validates the deck a session runs over.
#[derive(Clone)]
pub struct DeckService {
    source: Arc<dyn DeckSource>,
}

impl DeckService {
    #[must_use]
    pub fn new(source: Arc<dyn DeckSource>) -> Self {
        Self { source }
    }

    /// Read the deck from its source and validate every card.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Storage` if the source cannot be read.
    /// Returns `DeckServiceError::Deck` if the deck is empty or a card is malformed.
    pub async fn load_deck(&self) -> Result<Arc<Deck>, DeckServiceError> {
        let origin = self.source.describe();
        let record = self.source.load_deck().await.inspect_err(|err| {
            warn!(%origin, error = %err, "failed to read deck");
        })?;
        let deck = record.into_deck().inspect_err(|err| {
            warn!(%origin, error = %err, "deck failed validation");
        })?;
        info!(%origin, cards = deck.len(), title = deck.title().unwrap_or(""), "deck loaded");
        Ok(Arc::new(deck))
    }
}
