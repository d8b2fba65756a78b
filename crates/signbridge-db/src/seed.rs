//! Sample vocabulary inserted by `signbridge init-db`.

use rusqlite::Connection;
use signbridge_common::{Error, Result};

use crate::queries::words;

/// Words shipped with a fresh install. Each has a clip at `words/<word>.mp4`.
pub const SAMPLE_WORDS: &[&str] = &[
    "apple", "are", "book", "cat", "dog", "drink", "eat", "face", "father", "food", "go", "hand",
    "hello", "how", "i", "leg", "listen", "man", "me", "morning", "mother", "music", "name", "pen",
    "phone", "red", "say", "table", "thank", "water", "woman", "you",
];

/// Outcome of a seeding run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub added: Vec<String>,
    pub skipped: Vec<String>,
}

/// Insert the sample vocabulary, skipping labels that already exist.
pub fn seed_sample_words(conn: &Connection) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for word in SAMPLE_WORDS {
        let path = format!("words/{word}.mp4");
        match words::insert_word(conn, word, &path) {
            Ok(_) => report.added.push(word.to_string()),
            Err(Error::Conflict(_)) => report.skipped.push(word.to_string()),
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        added = report.added.len(),
        skipped = report.skipped.len(),
        "Seeded sample words"
    );

    Ok(report)
}
