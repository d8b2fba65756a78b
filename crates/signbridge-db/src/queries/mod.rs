//! Database query modules.
//!
//! - words: word-to-video table CRUD and case-insensitive lookup

pub mod words;
