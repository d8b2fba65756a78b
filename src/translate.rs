//! Text to clip translation.
//!
//! Tokenizes free text, looks every word up in the [`WordIndex`] and keeps
//! the words whose clip is actually present under the video root.

use std::path::Path;
use std::sync::Arc;

use signbridge_common::text::tokenize;
use signbridge_common::{Error, Result, WordIndex, WordVideo};
use url::Url;

use crate::streaming::locate_asset;

/// Result of translating a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// All tokens, in input order.
    pub words: Vec<String>,
    /// Clip paths relative to the video root, one per resolved token, in
    /// input order.
    pub video_paths: Vec<String>,
    /// Tokens without a usable clip, in input order.
    pub missing_words: Vec<String>,
}

/// Translate `text` into an ordered list of clip paths.
///
/// Fails with [`Error::NoWordsFound`] when the text has no words and with
/// [`Error::NoVideosResolved`] when none of them has a clip. Partial matches
/// succeed and report the rest in `missing_words`.
pub async fn translate(
    text: &str,
    index: Arc<dyn WordIndex>,
    video_root: &Path,
) -> Result<Translation> {
    let words = tokenize(text);
    if words.is_empty() {
        return Err(Error::NoWordsFound);
    }

    let hits = lookup_all(index, words.clone()).await?;

    let mut video_paths = Vec::new();
    let mut missing_words = Vec::new();
    for (word, hit) in words.iter().zip(hits) {
        let resolved = match hit {
            Some(entry) => resolve_clip(video_root, &entry).await,
            None => None,
        };
        match resolved {
            Some(path) => video_paths.push(path),
            None => missing_words.push(word.clone()),
        }
    }

    tracing::debug!(
        words = words.len(),
        resolved = video_paths.len(),
        missing = missing_words.len(),
        "Translated text"
    );

    if video_paths.is_empty() {
        return Err(Error::NoVideosResolved { missing_words });
    }

    Ok(Translation {
        words,
        video_paths,
        missing_words,
    })
}

async fn lookup_all(
    index: Arc<dyn WordIndex>,
    words: Vec<String>,
) -> Result<Vec<Option<WordVideo>>> {
    tokio::task::spawn_blocking(move || {
        words
            .iter()
            .map(|word| index.lookup(word))
            .collect::<Result<Vec<_>>>()
    })
    .await
    .map_err(|e| Error::internal(format!("Word lookup task failed: {e}")))?
}

async fn resolve_clip(video_root: &Path, entry: &WordVideo) -> Option<String> {
    match locate_asset(video_root, &entry.video_path).await {
        Ok(asset) => Some(asset.relative),
        Err(e) => {
            tracing::debug!(word = %entry.label, error = %e, "Clip not usable");
            None
        }
    }
}

/// Build the absolute URL under which a clip is served.
///
/// Path segments are percent-encoded; any path already on `base` is kept as
/// a prefix.
///
/// ```
/// use signbridge::translate::build_url;
///
/// let url = build_url("http://10.0.0.2:5000", "words/thank you.mp4").unwrap();
/// assert_eq!(url, "http://10.0.0.2:5000/videos/words/thank%20you.mp4");
/// ```
pub fn build_url(base: &str, relative_path: &str) -> Result<String> {
    let mut url =
        Url::parse(base).map_err(|e| Error::validation(format!("Invalid base URL '{base}': {e}")))?;

    url.path_segments_mut()
        .map_err(|_| Error::validation(format!("Base URL cannot carry a path: '{base}'")))?
        .pop_if_empty()
        .push("videos")
        .extend(relative_path.split('/'));

    Ok(url.to_string())
}
