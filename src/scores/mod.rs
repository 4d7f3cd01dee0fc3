//! Highscore table persisted under a single key.

pub mod backend;

pub use backend::{FileStore, KeyValueStore, MemoryStore};

use crate::error::{QuizError, Result};
use crate::model::ScoreEntry;

pub struct ScoreStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ScoreStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Records `value` for `initials`, keeping the existing entry when it is
    /// already at least as high.
    pub fn save(&mut self, initials: &str, value: i64) -> Result<()> {
        let initials = initials.trim();
        if initials.is_empty() {
            return Err(QuizError::InvalidInitials);
        }

        let mut entries = self.load_all();
        match entries.iter_mut().find(|e| e.initials == initials) {
            Some(existing) => {
                if value > existing.best_value {
                    log::info!(
                        "new best for {initials}: {value} (was {})",
                        existing.best_value
                    );
                    existing.best_value = value;
                }
            }
            None => {
                log::info!("first score for {initials}: {value}");
                entries.push(ScoreEntry::new(initials, value));
            }
        }
        self.persist(&entries)
    }

    /// Entries sorted by descending value; ties keep their stored order.
    pub fn load_all_sorted(&self) -> Vec<ScoreEntry> {
        let mut entries = self.load_all();
        entries.sort_by(|a, b| b.best_value.cmp(&a.best_value));
        entries
    }

    pub fn clear_all(&mut self) -> Result<()> {
        log::info!("clearing highscores");
        self.persist(&[])
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn load_all(&self) -> Vec<ScoreEntry> {
        let Some(raw) = self.backend.get(&self.key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("highscores under `{}` are unreadable, treating as empty: {err}", self.key);
            Vec::new()
        })
    }

    fn persist(&mut self, entries: &[ScoreEntry]) -> Result<()> {
        let json = serde_json::to_string(entries)?;
        self.backend.set(&self.key, json)
    }
}
