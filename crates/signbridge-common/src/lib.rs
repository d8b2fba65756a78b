//! Signbridge-Common: Shared types and utilities.
//!
//! This crate provides functionality shared by the server and the database
//! layer:
//!
//! - **Error Handling**: the common [`Error`] type and its HTTP status mapping
//! - **Path Confinement**: resolving client paths strictly under a video root
//! - **Tokenizer**: splitting free text into normalized words
//! - **Word Index**: the typed lookup interface from words to video clips
//!
//! # Examples
//!
//! ```
//! use signbridge_common::text::tokenize;
//! use signbridge_common::paths::normalize_relative;
//!
//! assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
//! assert_eq!(normalize_relative("words/./hello.mp4").unwrap(), "words/hello.mp4");
//! assert!(normalize_relative("../../etc/passwd").is_err());
//! ```

pub mod error;
pub mod index;
pub mod paths;
pub mod text;

pub use error::{Error, Result};
pub use index::{MemoryWordIndex, WordIndex, WordVideo};
