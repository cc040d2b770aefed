use thiserror::Error;

use crate::model::card::{Card, CardDraft, CardError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck has no cards")]
    Empty,

    /// `position` is 1-based, matching how authors count cards in a file.
    #[error("card {position}: {source}")]
    InvalidCard {
        position: usize,
        #[source]
        source: CardError,
    },
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// The fixed, ordered set of cards quizzed in one session.
///
/// A deck always holds at least one card and its order never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: Option<String>,
    cards: Vec<Card>,
}

impl Deck {
    /// Build a deck from already validated cards.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Empty` if `cards` is empty.
    pub fn new(title: Option<String>, cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Ok(Self { title, cards })
    }

    /// Validate every draft and build a deck, preserving draft order.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::InvalidCard` for the first draft that fails
    /// validation, or `DeckError::Empty` if there are no drafts.
    pub fn from_drafts(
        title: Option<String>,
        drafts: impl IntoIterator<Item = CardDraft>,
    ) -> Result<Self, DeckError> {
        let cards = drafts
            .into_iter()
            .enumerate()
            .map(|(idx, draft)| {
                draft.validate().map_err(|source| DeckError::InvalidCard {
                    position: idx + 1,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(title, cards)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false` for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
