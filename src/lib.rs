//! Signbridge - text to sign-language video service
//!
//! This library crate exposes the server pieces for integration testing.

pub mod config;
pub mod server;
pub mod streaming;
pub mod translate;
