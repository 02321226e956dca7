//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all read-only queries
//! over the snapshot store. It never writes to the store.

use cfgsnap_core::diff::{export_lines, render_human_summary, DiffResult};
use cfgsnap_core::errors::Result;
use cfgsnap_core::keys::KeyDecomposer;
use cfgsnap_core::store::SnapshotStore;
use cfgsnap_core::{log_op_end, log_op_error, log_op_start};
use cfgsnap_core::{SnapshotCatalog, SnapshotSummary};

/// The structured + rendered result of a `SnapshotDiff` query.
#[derive(Debug, Clone)]
pub struct SnapshotDiffResult {
    /// Machine-readable structured diff
    pub diff: DiffResult,
    /// Human-readable text summary
    pub human_summary: String,
}

/// Read-only queries supported by the engine.
///
/// Snapshot references are the operator's 1-based catalog indices, as typed.
#[derive(Debug, Clone)]
pub enum EngineQuery {
    /// List every snapshot with its delta from the previous one.
    SnapshotList,
    /// Diff two snapshots.
    SnapshotDiff { a: String, b: String },
    /// Render the diff of two snapshots as a `config:set` script.
    SnapshotExport { a: String, b: String },
}

/// All possible results from `apply_engine_query`.
#[derive(Debug, Clone)]
pub enum EngineQueryResult {
    SnapshotList(Vec<SnapshotSummary>),
    SnapshotDiff(Box<SnapshotDiffResult>),
    /// One command per line, without line terminators.
    SnapshotExport(Vec<String>),
}

/// Apply a read-only engine query.
///
/// # Errors
///
/// - `StoreUnavailable` if the store cannot be enumerated
/// - `InvalidInput` / `SnapshotNotFound` for bad indices
/// - `MalformedKey` if a differing key cannot be decomposed
/// - the store's load error for either snapshot of a diff or export
pub fn apply_engine_query(
    query: EngineQuery,
    store: &dyn SnapshotStore,
    keys: &KeyDecomposer,
) -> Result<EngineQueryResult> {
    match query {
        // ── SnapshotList ──────────────────────────────────────────────────────
        EngineQuery::SnapshotList => {
            log_op_start!("snapshot_list");
            let start = std::time::Instant::now();

            let result = (|| -> Result<Vec<SnapshotSummary>> {
                let catalog = SnapshotCatalog::open(store, keys)?;
                Ok(catalog.list_snapshots())
            })();

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(summaries) => log_op_end!(
                    "snapshot_list",
                    duration_ms = elapsed,
                    snapshot_count = summaries.len()
                ),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snapshot_list", e_clone, duration_ms = elapsed);
                }
            }
            result.map(EngineQueryResult::SnapshotList)
        }

        // ── SnapshotDiff ──────────────────────────────────────────────────────
        EngineQuery::SnapshotDiff { a, b } => {
            log_op_start!("snapshot_diff", from = %a, to = %b);
            let start = std::time::Instant::now();

            let result = (|| -> Result<SnapshotDiffResult> {
                let diff = SnapshotCatalog::open(store, keys)?.diff(&a, &b)?;
                let human_summary = render_human_summary(&diff);
                Ok(SnapshotDiffResult {
                    diff,
                    human_summary,
                })
            })();

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(r) => log_op_end!(
                    "snapshot_diff",
                    duration_ms = elapsed,
                    line_count = r.diff.lines.len()
                ),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snapshot_diff", e_clone, duration_ms = elapsed);
                }
            }
            result.map(|r| EngineQueryResult::SnapshotDiff(Box::new(r)))
        }

        // ── SnapshotExport ────────────────────────────────────────────────────
        EngineQuery::SnapshotExport { a, b } => {
            log_op_start!("snapshot_export", from = %a, to = %b);
            let start = std::time::Instant::now();

            let result = (|| -> Result<Vec<String>> {
                let diff = SnapshotCatalog::open(store, keys)?.diff(&a, &b)?;
                Ok(export_lines(&diff))
            })();

            let elapsed = start.elapsed().as_millis() as u64;
            match &result {
                Ok(lines) => log_op_end!(
                    "snapshot_export",
                    duration_ms = elapsed,
                    line_count = lines.len()
                ),
                Err(e) => {
                    let e_clone = e.clone();
                    log_op_error!("snapshot_export", e_clone, duration_ms = elapsed);
                }
            }
            result.map(EngineQueryResult::SnapshotExport)
        }
    }
}
