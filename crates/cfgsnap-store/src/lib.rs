//! cfgsnap store - persistence and configuration source adapters
//!
//! Provides:
//! - A filesystem snapshot store (one JSON file per snapshot, atomic writes)
//! - A SQLite configuration source reading `core_config_data`

pub mod db;
pub mod errors;
pub mod snapshot;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use snapshot::FsSnapshotStore;
pub use source::SqliteConfigSource;
