use std::time::Duration;

use thiserror::Error;

/// How long answer feedback stays visible before the next card appears.
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 1_500;

/// Upper bound accepted for the feedback delay.
pub const MAX_FEEDBACK_DELAY_MS: u64 = 60_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("feedback delay must be at most {max} ms, got {ms} ms")]
    FeedbackDelayOutOfRange { ms: u64, max: u64 },
}

/// Behaviour knobs for a quiz session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    feedback_delay: Duration,
    shuffle_options: bool,
}

/// Raw settings as collected from flags or the environment.
///
/// Missing fields fall back to [`QuizSettings::default`].
#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub feedback_delay_ms: Option<u64>,
    pub shuffle_options: Option<bool>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `SettingsError::FeedbackDelayOutOfRange` when the delay exceeds
    /// [`MAX_FEEDBACK_DELAY_MS`].
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let defaults = QuizSettings::default();
        let feedback_delay = match self.feedback_delay_ms {
            Some(ms) if ms > MAX_FEEDBACK_DELAY_MS => {
                return Err(SettingsError::FeedbackDelayOutOfRange {
                    ms,
                    max: MAX_FEEDBACK_DELAY_MS,
                });
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.feedback_delay,
        };

        Ok(QuizSettings {
            feedback_delay,
            shuffle_options: self.shuffle_options.unwrap_or(defaults.shuffle_options),
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    #[must_use]
    pub fn shuffle_options(&self) -> bool {
        self.shuffle_options
    }

    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    #[must_use]
    pub fn with_shuffle_options(mut self, shuffle: bool) -> Self {
        self.shuffle_options = shuffle;
        self
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            feedback_delay: Duration::from_millis(DEFAULT_FEEDBACK_DELAY_MS),
            shuffle_options: true,
        }
    }
}
