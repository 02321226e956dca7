//! Snapshot data model.

pub mod record;
pub mod snapshot;

pub use record::{NullableVars, RecordFormat, SnapshotRecord, StoredRecord};
pub use snapshot::{ConfigVars, Snapshot, SnapshotId};
