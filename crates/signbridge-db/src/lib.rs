//! Signbridge-DB: Database schema, migrations, and query operations
//!
//! This crate stores the word table using SQLite with rusqlite and r2d2
//! connection pooling.
//!
//! # Modules
//!
//! - `migrations` - Database schema migrations
//! - `pool` - Connection pool management
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//! - `seed` - Sample vocabulary for fresh installs
//! - `index` - [`WordIndex`](signbridge_common::WordIndex) backed by the pool
//!
//! # Example
//!
//! ```
//! use signbridge_db::pool::{init_memory_pool, get_conn};
//! use signbridge_db::queries::words;
//!
//! let pool = init_memory_pool().unwrap();
//! let conn = get_conn(&pool).unwrap();
//!
//! let word = words::insert_word(&conn, "hello", "words/hello.mp4").unwrap();
//! assert_eq!(word.label, "hello");
//! ```

pub mod index;
pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
pub mod seed;

pub use index::SqliteWordIndex;
