//! Engine-level action commands for I/O operations.

use crate::commands::snapshot::{take_snapshot, TakeSnapshotResult};
use cfgsnap_core::errors::Result;
use cfgsnap_core::store::{ConfigSource, SnapshotStore};

/// Engine-level commands that write to the snapshot store.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Capture the live configuration as a new snapshot.
    TakeSnapshot { message: String },
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    /// Snapshot was persisted.
    SnapshotTaken(TakeSnapshotResult),
}

/// Apply an engine command.
///
/// # Errors
///
/// See [`take_snapshot`].
pub fn apply_engine_command(
    cmd: EngineCommand,
    source: &dyn ConfigSource,
    store: &dyn SnapshotStore,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::TakeSnapshot { message } => {
            take_snapshot(&message, source, store).map(EngineCommandResult::SnapshotTaken)
        }
    }
}
