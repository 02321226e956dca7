//! cfgsnap core - snapshot diff engine for a flat key/value config store
//!
//! This crate provides the pure pieces of cfgsnap:
//! - Composite key decomposition (`<path>-<scope>-<scopeId>`)
//! - Snapshot records in the current and legacy on-disk formats
//! - Deterministic diff computation and its human/export renderings
//! - The snapshot catalog with per-entry deltas
//! - Collaborator traits for stores and configuration sources
//! - The error and logging facilities shared by every cfgsnap crate

pub mod catalog;
pub mod diff;
pub mod errors;
pub mod keys;
pub mod logging_facility;
pub mod model;
pub mod revs;
pub mod store;

// The logging macros refer to schema constants through this path.
pub use cfgsnap_core_types;

// Re-export commonly used types
pub use catalog::{SnapshotCatalog, SnapshotSummary};
pub use diff::{compute_diff, ChangeKind, DiffLine, DiffResult, DiffResultCount};
pub use errors::{ExError, ExErrorKind, Result, SnapshotError};
pub use keys::{KeyDecomposer, Scope};
pub use model::{ConfigVars, Snapshot, SnapshotId, SnapshotRecord};
pub use store::{ConfigSource, SnapshotStore};
