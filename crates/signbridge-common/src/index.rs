//! The [`WordIndex`] trait mapping normalized words to video clips.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A word and the clip that signs it.
///
/// `video_path` is relative to the configured video root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordVideo {
    pub label: String,
    pub video_path: String,
}

/// Lookup table from words to video clips.
///
/// Implementations must be safe to share across threads (`Send + Sync`).
/// Lookups are case-insensitive on the label.
pub trait WordIndex: Send + Sync {
    /// Human-readable name identifying the backing store.
    fn name(&self) -> &'static str;

    /// Find the clip registered for `word`, if any.
    fn lookup(&self, word: &str) -> Result<Option<WordVideo>>;
}

/// A fixed, in-memory word index.
#[derive(Debug, Clone, Default)]
pub struct MemoryWordIndex {
    entries: HashMap<String, WordVideo>,
}

impl MemoryWordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip. A later insert for the same label replaces the
    /// earlier one.
    pub fn insert(&mut self, label: &str, video_path: &str) {
        let label = label.to_lowercase();
        self.entries.insert(
            label.clone(),
            WordVideo {
                label,
                video_path: video_path.to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MemoryWordIndex {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (label, path) in iter {
            index.insert(label, path);
        }
        index
    }
}

impl WordIndex for MemoryWordIndex {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn lookup(&self, word: &str) -> Result<Option<WordVideo>> {
        Ok(self.entries.get(&word.to_lowercase()).cloned())
    }
}
