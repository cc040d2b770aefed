use std::collections::HashSet;

use thiserror::Error;

use crate::model::text::{ChoiceText, QuestionText};

/// Every card is a four-way multiple-choice question.
pub const OPTIONS_PER_CARD: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("question cannot be empty")]
    EmptyQuestion,

    #[error("expected {expected} options, found {found}")]
    OptionCount { expected: usize, found: usize },

    #[error("option {position} cannot be empty")]
    EmptyOption { position: usize },

    #[error("option \"{option}\" is listed more than once")]
    DuplicateOption { option: String },

    #[error("answer cannot be empty")]
    EmptyAnswer,

    #[error("answer \"{answer}\" is not one of the options")]
    AnswerNotAnOption { answer: String },
}

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated card input, as read from a deck file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl CardDraft {
    #[must_use]
    pub fn new<I, S>(question: impl Into<String>, options: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Validate the draft into an immutable `Card`.
    ///
    /// Option positions in errors are 1-based.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if the question or an option is blank, the option
    /// count is not [`OPTIONS_PER_CARD`], two options differ only by case, or
    /// the answer does not match any option case-insensitively.
    pub fn validate(self) -> Result<Card, CardError> {
        let question = QuestionText::parse(self.question).map_err(|_| CardError::EmptyQuestion)?;

        if self.options.len() != OPTIONS_PER_CARD {
            return Err(CardError::OptionCount {
                expected: OPTIONS_PER_CARD,
                found: self.options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(OPTIONS_PER_CARD);
        let mut options = Vec::with_capacity(OPTIONS_PER_CARD);
        for (idx, raw) in self.options.into_iter().enumerate() {
            let key = raw.to_lowercase();
            let option =
                ChoiceText::parse(raw).map_err(|_| CardError::EmptyOption { position: idx + 1 })?;
            if !seen.insert(key) {
                return Err(CardError::DuplicateOption {
                    option: option.as_str().to_owned(),
                });
            }
            options.push(option);
        }
        let options: [ChoiceText; OPTIONS_PER_CARD] =
            options.try_into().map_err(|rest: Vec<ChoiceText>| CardError::OptionCount {
                expected: OPTIONS_PER_CARD,
                found: rest.len(),
            })?;

        let answer = ChoiceText::parse(self.answer).map_err(|_| CardError::EmptyAnswer)?;
        if !seen.contains(&answer.as_str().to_lowercase()) {
            return Err(CardError::AnswerNotAnOption {
                answer: answer.as_str().to_owned(),
            });
        }

        Ok(Card {
            question,
            options,
            answer,
        })
    }
}

/// A single multiple-choice question. Immutable once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    question: QuestionText,
    options: [ChoiceText; OPTIONS_PER_CARD],
    answer: ChoiceText,
}

impl Card {
    #[must_use]
    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    /// Options in the order they were authored.
    #[must_use]
    pub fn options(&self) -> &[ChoiceText] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(ChoiceText::as_str)
    }

    /// The designated answer, exactly as authored.
    #[must_use]
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Case-insensitive comparison against the answer.
    ///
    /// Both sides are lowercased; nothing else is normalized, so surrounding
    /// whitespace makes a choice non-matching.
    #[must_use]
    pub fn matches_answer(&self, choice: &str) -> bool {
        choice.to_lowercase() == self.answer.as_str().to_lowercase()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
