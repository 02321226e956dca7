//! Collaborator traits consumed by the catalog and the engine.
//!
//! Implementations live in `cfgsnap-store`; the core crate only depends on
//! these narrow interfaces.

use crate::errors::Result;
use crate::model::{ConfigVars, SnapshotId, SnapshotRecord};

/// Persists and retrieves snapshot records.
pub trait SnapshotStore {
    /// Enumerate all stored snapshot identifiers in creation order.
    ///
    /// An absent store (nothing saved yet) yields an empty list.
    ///
    /// # Errors
    ///
    /// `StoreUnavailable` if the store exists but cannot be enumerated.
    fn list_snapshot_ids(&self) -> Result<Vec<SnapshotId>>;

    /// Load one record, accepting both the current and legacy formats.
    ///
    /// # Errors
    ///
    /// `StoreUnavailable`/`Io` on read failure, `Serialization` on an
    /// undecodable record.
    fn load(&self, id: &SnapshotId) -> Result<SnapshotRecord>;

    /// Persist a new record and return its identifier.
    ///
    /// # Errors
    ///
    /// `StoreUnavailable`/`Io` on write failure, `AlreadyExists` if the
    /// identifier is already taken.
    fn save(&self, record: &SnapshotRecord) -> Result<SnapshotId>;
}

/// Retrieves the live configuration for a new snapshot.
pub trait ConfigSource {
    /// Fetch every composite key and its current value.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the source cannot be queried.
    fn fetch_current_config(&self) -> Result<ConfigVars>;
}
