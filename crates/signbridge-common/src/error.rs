//! Common error type used throughout signbridge.
//!
//! Every crate funnels its failures into [`Error`], which carries enough
//! context for handlers to derive an HTTP status code via [`Error::http_status`].

/// Unified error type for signbridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A client path tried to leave the video root.
    #[error("Path escapes the video root: {0}")]
    PathTraversal(String),

    /// The requested video asset does not exist.
    #[error("Video not found: {0}")]
    AssetNotFound(String),

    /// The requested byte range starts past the end of the asset.
    #[error("Range not satisfiable for asset of {size} bytes")]
    RangeNotSatisfiable {
        /// Total size of the asset in bytes.
        size: u64,
    },

    /// The asset existed at check time but could not be opened or read.
    #[error("Video unavailable: {path}: {source}")]
    AssetUnavailable {
        /// Path of the asset that failed.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Tokenization produced no words.
    #[error("No valid words found")]
    NoWordsFound,

    /// None of the words resolved to a video.
    #[error("No videos found")]
    NoVideosResolved {
        /// Words that had no usable video, in input order.
        missing_words: Vec<String>,
    },

    /// Request data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A conflicting resource already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::PathTraversal(_) => 400,
            Error::AssetNotFound(_) => 404,
            Error::RangeNotSatisfiable { .. } => 416,
            Error::AssetUnavailable { .. } => 404,
            Error::NoWordsFound => 400,
            Error::NoVideosResolved { .. } => 404,
            Error::Validation(_) => 400,
            Error::Conflict(_) => 409,
            Error::Database(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::PathTraversal(_) => "path_traversal",
            Error::AssetNotFound(_) => "not_found",
            Error::RangeNotSatisfiable { .. } => "range_not_satisfiable",
            Error::AssetUnavailable { .. } => "asset_unavailable",
            Error::NoWordsFound => "no_words_found",
            Error::NoVideosResolved { .. } => "no_videos_resolved",
            Error::Validation(_) => "validation_error",
            Error::Conflict(_) => "conflict",
            Error::Database(_) => "database_error",
            Error::Internal(_) => "internal_error",
        }
    }

    /// Create a new AssetNotFound error.
    pub fn not_found<S: Into<String>>(path: S) -> Self {
        Self::AssetNotFound(path.into())
    }

    /// Create a new AssetUnavailable error.
    pub fn unavailable<S: Into<String>>(path: S, source: std::io::Error) -> Self {
        Self::AssetUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a new Database error.
    pub fn database<S: Into<String>>(msg: S) -> Self {
        Self::Database(msg.into())
    }

    /// Create a new Validation error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
