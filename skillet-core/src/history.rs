//! Durable recipe history.
//!
//! The history is an ordered log of generation events persisted as a single
//! JSON document. Appends go to the tail; the only in-place mutation is the
//! like counter of the most recent entry. Every mutation rewrites the whole
//! file through a temp-file-then-rename, so a crashed write leaves the
//! previous content intact.
//!
//! Single-process only: concurrent writers to the same file can lose the
//! less recently written history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted history exists but cannot be parsed. Fatal: the store
    /// refuses to touch the file rather than discard user data.
    #[error("history file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write history file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize history: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Like-increment attempted on an empty history.
    #[error("cannot like the latest recipe: history is empty")]
    Empty,
}

/// One persisted recipe-generation event.
///
/// `dietary_tags` is the tag set computed at generation time and is never
/// recomputed, even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub recipe: String,
    pub timestamp: DateTime<Utc>,
    pub ingredients: Vec<String>,
    pub likes: u32,
    pub dietary_tags: Vec<String>,
}

impl RecipeEntry {
    /// Create an entry stamped with the current time and zero likes.
    pub fn new(recipe: String, ingredients: Vec<String>, dietary_tags: Vec<String>) -> Self {
        Self {
            recipe,
            timestamp: Utc::now(),
            ingredients,
            likes: 0,
            dietary_tags,
        }
    }
}

/// File-backed history store owning the in-memory entry sequence.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<RecipeEntry>,
}

impl HistoryStore {
    /// Open the store at `path`, loading any persisted entries.
    ///
    /// A missing file is a normal first run and yields an empty history.
    /// An unparsable file is a [`HistoryError::Corrupt`] and the file is
    /// left untouched.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HistoryError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| HistoryError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no history file yet, starting empty");
                Vec::new()
            }
            Err(source) => return Err(HistoryError::Read { path, source }),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[RecipeEntry] {
        &self.entries
    }

    /// Append an entry and persist the full history.
    pub fn append(&mut self, entry: RecipeEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        self.flush()
    }

    /// Increment the like counter of the most recent entry and persist.
    /// Returns the new count.
    pub fn like_last(&mut self) -> Result<u32, HistoryError> {
        let last = self.entries.last_mut().ok_or(HistoryError::Empty)?;
        last.likes += 1;
        let likes = last.likes;
        self.flush()?;
        Ok(likes)
    }

    /// Rewrite the entire serialized history.
    ///
    /// Writes to a temp file in the target directory and renames over the
    /// destination, so readers never observe a partial document.
    fn flush(&self) -> Result<(), HistoryError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })?;

        let json =
            serde_json::to_string_pretty(&self.entries).map_err(HistoryError::Serialize)?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })?;
        temp.write_all(json.as_bytes())
            .map_err(|source| HistoryError::Write {
                path: self.path.clone(),
                source,
            })?;
        temp.persist(&self.path)
            .map_err(|e| HistoryError::Write {
                path: self.path.clone(),
                source: e.error,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = self.entries.len(),
            "history flushed"
        );
        Ok(())
    }
}
