//! Rust models matching the database schema.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use signbridge_common::WordVideo;

/// A row of the `word_videos` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordRecord {
    pub id: i64,
    pub label: String,
    /// Clip location relative to the video root.
    pub video_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<WordRecord> for WordVideo {
    fn from(record: WordRecord) -> Self {
        WordVideo {
            label: record.label,
            video_path: record.video_path,
        }
    }
}

/// Parse a stored timestamp.
///
/// Rows written by this crate use RFC 3339; rows inserted by hand fall back to
/// SQLite's `datetime('now')` format.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}
