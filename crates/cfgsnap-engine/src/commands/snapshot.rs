//! Snapshot capture orchestration.
//!
//! 1. Fetch the live configuration from the source
//! 2. Build a current-format record with the operator's message
//! 3. Persist it (the store assigns the identifier)

use cfgsnap_core::errors::Result;
use cfgsnap_core::model::{SnapshotId, SnapshotRecord};
use cfgsnap_core::store::{ConfigSource, SnapshotStore};
use cfgsnap_core::{log_op_end, log_op_error, log_op_start};
use serde::Serialize;

/// Result of a successfully taken snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TakeSnapshotResult {
    pub snapshot_id: SnapshotId,
    /// Number of composite keys captured
    pub var_count: usize,
}

/// Capture the current configuration as a new snapshot.
///
/// # Errors
///
/// `SourceUnavailable` if the configuration cannot be read; the store's
/// error (`StoreUnavailable`, `Io`, `AlreadyExists`) if it cannot be saved.
/// Nothing is written when the source fails.
pub fn take_snapshot<C, S>(message: &str, source: &C, store: &S) -> Result<TakeSnapshotResult>
where
    C: ConfigSource + ?Sized,
    S: SnapshotStore + ?Sized,
{
    log_op_start!("snapshot_take", has_message = !message.is_empty());
    let start = std::time::Instant::now();

    let result = (|| -> Result<TakeSnapshotResult> {
        let vars = source.fetch_current_config()?;
        let var_count = vars.len();
        let snapshot_id = store.save(&SnapshotRecord::new(message, vars))?;
        Ok(TakeSnapshotResult {
            snapshot_id,
            var_count,
        })
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(r) => log_op_end!(
            "snapshot_take",
            duration_ms = elapsed,
            snapshot_id = %r.snapshot_id,
            var_count = r.var_count
        ),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!("snapshot_take", e_clone, duration_ms = elapsed);
        }
    }
    result
}
