mod card;
mod deck;
mod session;
mod settings;
pub mod text;

pub use card::{Card, CardDraft, CardError, OPTIONS_PER_CARD};
pub use deck::{Deck, DeckError};
pub use session::{Score, SessionSummary, SessionSummaryError};
pub use settings::{
    DEFAULT_FEEDBACK_DELAY_MS, MAX_FEEDBACK_DELAY_MS, QuizSettings, QuizSettingsDraft,
    SettingsError,
};
pub use text::{ChoiceText, QuestionText, TextError};
