//! [`WordIndex`] backed by the SQLite word table.

use signbridge_common::{Result, WordIndex, WordVideo};

use crate::pool::{get_conn, DbPool};
use crate::queries::words;

/// Word index reading from the `word_videos` table.
///
/// Lookups are blocking; async callers should run them on a blocking thread.
#[derive(Clone)]
pub struct SqliteWordIndex {
    pool: DbPool,
}

impl SqliteWordIndex {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl WordIndex for SqliteWordIndex {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn lookup(&self, word: &str) -> Result<Option<WordVideo>> {
        let conn = get_conn(&self.pool)?;
        Ok(words::find_by_label(&conn, word)?.map(WordVideo::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn test_lookup_through_trait() {
        let pool = init_memory_pool().unwrap();
        words::insert_word(&get_conn(&pool).unwrap(), "Thank", "words/thank.mp4").unwrap();

        let index: Box<dyn WordIndex> = Box::new(SqliteWordIndex::new(pool));
        assert_eq!(index.name(), "sqlite");

        let hit = index.lookup("THANK").unwrap().unwrap();
        assert_eq!(
            hit,
            WordVideo {
                label: "thank".into(),
                video_path: "words/thank.mp4".into(),
            }
        );
        assert!(index.lookup("unknown").unwrap().is_none());
    }
}
