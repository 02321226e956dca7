pub mod diff;
pub mod export;
pub mod list;
pub mod take;

use cfgsnap_core::errors::{ExError, ExErrorKind};
use cfgsnap_core::KeyDecomposer;
use cfgsnap_engine::commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
use cfgsnap_store::FsSnapshotStore;
use clap::ValueEnum;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Run a read-only query against the configured snapshot directory.
fn run_query(
    query: EngineQuery,
    settings: &Settings,
) -> Result<EngineQueryResult, Box<dyn std::error::Error>> {
    let store = FsSnapshotStore::new(&settings.snapshot_dir);
    let keys = KeyDecomposer::new();
    Ok(apply_engine_query(query, &store, &keys)?)
}

/// The engine answered `op` with a result of the wrong variant.
fn unexpected_result(op: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message("unexpected query result")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_result_is_internal() {
        let err = unexpected_result("snapshot_diff");
        assert_eq!(err.kind(), ExErrorKind::Internal);
        assert_eq!(err.code(), "ERR_INTERNAL");
        assert_eq!(err.op(), Some("snapshot_diff"));
    }
}
