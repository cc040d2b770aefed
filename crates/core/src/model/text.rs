use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be empty")]
    Empty,
}

/// Non-blank text tagged with the role it plays on a card.
///
/// The input string is kept verbatim, without trimming. Answers are compared
/// exactly, modulo case.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Text<T>(String, PhantomData<T>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {}

pub type QuestionText = Text<Question>;
pub type ChoiceText = Text<Choice>;

impl<T> Text<T> {
    /// # Errors
    ///
    /// Returns `TextError::Empty` if `s` is empty or only whitespace.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(s, PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T> fmt::Debug for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<T> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<T> AsRef<str> for Text<T> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
