//! Error handling for cfgsnap-store
//!
//! Wraps cfgsnap-core ExError with store-specific helpers

use cfgsnap_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// The snapshot directory exists but cannot be used
pub fn store_unavailable(operation: &str, dir: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::StoreUnavailable)
        .with_op(operation.to_string())
        .with_entity_id(dir.display().to_string())
        .with_message(format!("snapshot store unavailable: {}", err))
}

/// A snapshot file with this identifier is already on disk
pub fn snapshot_exists(id: &str) -> ExError {
    ExError::new(ExErrorKind::AlreadyExists)
        .with_op("save_snapshot")
        .with_entity_id(id.to_string())
        .with_message(format!(
            "Snapshot {} already exists; wait a second and retry",
            id
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Wrap a database failure as an unavailable configuration source
pub fn source_unavailable(operation: &str, err: ExError) -> ExError {
    ExError::new(ExErrorKind::SourceUnavailable)
        .with_op(operation.to_string())
        .with_message("configuration source unavailable")
        .with_source(err)
}
