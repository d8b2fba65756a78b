//! Word table queries.
//!
//! Labels are stored trimmed and lower-cased; lookups ignore case.

use chrono::Utc;
use rusqlite::{types::Type, Connection, Row};
use signbridge_common::text::normalize_label;
use signbridge_common::{Error, Result};

use crate::models::{parse_timestamp, WordRecord};

const WORD_COLUMNS: &str = "id, label, video_path, created_at";

fn row_to_word(row: &Row<'_>) -> rusqlite::Result<WordRecord> {
    let raw_created: String = row.get(3)?;
    let created_at = parse_timestamp(&raw_created).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            format!("invalid timestamp: {raw_created}").into(),
        )
    })?;

    Ok(WordRecord {
        id: row.get(0)?,
        label: row.get(1)?,
        video_path: row.get(2)?,
        created_at,
    })
}

/// Register a word.
///
/// # Arguments
///
/// * `conn` - Database connection
/// * `label` - The word; trimmed and lower-cased before storing
/// * `video_path` - Clip location relative to the video root
///
/// # Returns
///
/// * `Ok(WordRecord)` - The stored row
/// * `Err(Error::Conflict)` - If the label is already registered
/// * `Err(Error)` - If a database error occurs
pub fn insert_word(conn: &Connection, label: &str, video_path: &str) -> Result<WordRecord> {
    let label = normalize_label(label);
    let created_at = Utc::now();

    conn.execute(
        "INSERT INTO word_videos (label, video_path, created_at)
         VALUES (:label, :video_path, :created_at)",
        rusqlite::named_params! {
            ":label": label,
            ":video_path": video_path,
            ":created_at": created_at.to_rfc3339(),
        },
    )
    .map_err(|e| {
        if e.to_string().contains("UNIQUE constraint failed") {
            Error::Conflict(format!("Word '{}' already exists", label))
        } else {
            Error::database(e.to_string())
        }
    })?;

    Ok(WordRecord {
        id: conn.last_insert_rowid(),
        label,
        video_path: video_path.to_string(),
        created_at,
    })
}

/// Find a word by label, ignoring case.
///
/// # Returns
///
/// * `Ok(Some(WordRecord))` - The word if registered
/// * `Ok(None)` - If the word is unknown
/// * `Err(Error)` - If a database error occurs
pub fn find_by_label(conn: &Connection, word: &str) -> Result<Option<WordRecord>> {
    let result = conn.query_row(
        &format!("SELECT {WORD_COLUMNS} FROM word_videos WHERE label = :label COLLATE NOCASE"),
        rusqlite::named_params! { ":label": word.trim() },
        row_to_word,
    );

    match result {
        Ok(word) => Ok(Some(word)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List all words ordered by label.
pub fn list_words(conn: &Connection) -> Result<Vec<WordRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {WORD_COLUMNS} FROM word_videos ORDER BY label"
        ))
        .map_err(|e| Error::database(e.to_string()))?;

    let words = stmt
        .query_map([], row_to_word)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(words)
}

/// Count registered words.
pub fn count_words(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM word_videos", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Delete a word by label, ignoring case.
///
/// Returns `true` if a row was removed.
pub fn delete_word(conn: &Connection, label: &str) -> Result<bool> {
    let affected = conn
        .execute(
            "DELETE FROM word_videos WHERE label = :label COLLATE NOCASE",
            rusqlite::named_params! { ":label": label.trim() },
        )
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(affected > 0)
}
