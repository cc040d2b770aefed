//! JSON deck files.
//!
//! Layout:
//!
//! ```json
//! { "title": "optional", "cards": [ { "question": "...", "options": ["a","b","c","d"], "answer": "a" } ] }
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::repository::{DeckRecord, DeckSource, StorageError};

/// Parse a deck from JSON text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, missing fields or
/// unknown fields.
pub fn parse_deck(raw: &str) -> Result<DeckRecord, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// A deck stored in a JSON file on disk. The file is read on every load.
#[derive(Clone, Debug)]
pub struct JsonDeckFile {
    path: PathBuf,
}

impl JsonDeckFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DeckSource for JsonDeckFile {
    async fn load_deck(&self) -> Result<DeckRecord, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound(self.describe()),
                _ => StorageError::Io(format!("{}: {e}", self.describe())),
            })?;
        debug!(path = %self.path.display(), bytes = raw.len(), "read deck file");
        parse_deck(&raw).map_err(|e| match e {
            StorageError::Serialization(msg) => {
                StorageError::Serialization(format!("{}: {msg}", self.describe()))
            }
            other => other,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
