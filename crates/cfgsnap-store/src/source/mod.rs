//! Live configuration sources

pub mod sqlite;

pub use sqlite::SqliteConfigSource;
