//! Snapshot catalog: ordered snapshot identities with per-entry deltas.
//!
//! The catalog holds only identifiers. Snapshot content is loaded on demand
//! for the duration of a single call and never cached across calls.
//!
//! Listing is not atomic with respect to a concurrent snapshot save: a save
//! that lands mid-listing may or may not appear.

use crate::diff::{compute_diff, DiffResult, DiffResultCount};
use crate::errors::{ExError, Result};
use crate::keys::KeyDecomposer;
use crate::model::{Snapshot, SnapshotId, SnapshotRecord};
use crate::revs::resolve_diff_revs;
use crate::store::SnapshotStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a snapshot listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    /// 1-based catalog position
    pub index: usize,
    pub id: SnapshotId,
    /// Delta from the preceding snapshot; all zero for the first entry
    pub count: DiffResultCount,
    pub time: DateTime<Utc>,
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>4} {:<33} {} {}",
            self.index,
            self.id,
            self.count,
            self.time.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

/// Ordered view over the snapshots in a store.
pub struct SnapshotCatalog<'a, S: SnapshotStore + ?Sized> {
    store: &'a S,
    keys: &'a KeyDecomposer,
    ids: Vec<SnapshotId>,
}

impl<'a, S: SnapshotStore + ?Sized> SnapshotCatalog<'a, S> {
    /// Enumerate the store and sort identifiers ascending (chronological).
    ///
    /// # Errors
    ///
    /// Propagates enumeration failures; a total failure is never swallowed.
    pub fn open(store: &'a S, keys: &'a KeyDecomposer) -> Result<Self> {
        let mut ids = store.list_snapshot_ids()?;
        ids.sort();
        Ok(Self { store, keys, ids })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[SnapshotId] {
        &self.ids
    }

    /// Load the snapshot at 0-based `position`.
    ///
    /// # Errors
    ///
    /// `SnapshotNotFound` for a position past the end, or the store's load error.
    pub fn load(&self, position: usize) -> Result<Snapshot> {
        let id = self.ids.get(position).ok_or_else(|| {
            ExError::from(crate::errors::SnapshotError::SnapshotNotFound {
                index: position as i64 + 1,
                available: self.ids.len(),
            })
        })?;
        let record = self.store.load(id)?;
        Ok(Snapshot::from_record(position + 1, id.clone(), record))
    }

    /// Summaries for every snapshot, each annotated with its delta from
    /// the previous one.
    ///
    /// Each record is loaded once. If a record cannot be loaded, or the pair
    /// cannot be diffed, the affected entries get a zero count and the
    /// listing continues.
    pub fn list_snapshots(&self) -> Vec<SnapshotSummary> {
        let mut summaries = Vec::with_capacity(self.ids.len());
        let mut previous: Option<SnapshotRecord> = None;

        for (position, id) in self.ids.iter().enumerate() {
            let time = id.timestamp().unwrap_or_else(|| {
                tracing::debug!(snapshot_id = %id, "identifier has no timestamp; using now");
                Utc::now()
            });

            let current = match self.store.load(id) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        snapshot_id = %id,
                        error = %e,
                        "snapshot unreadable; count degraded to zero"
                    );
                    None
                }
            };

            let count = match (position, &previous, &current) {
                (0, _, _) => DiffResultCount::default(),
                (_, Some(prev), Some(cur)) => {
                    match compute_diff(&prev.vars, &cur.vars, position - 1, position, self.keys) {
                        Ok(diff) => diff.count,
                        Err(e) => {
                            tracing::warn!(
                                snapshot_id = %id,
                                error = %e,
                                "diff failed; count degraded to zero"
                            );
                            DiffResultCount::default()
                        }
                    }
                }
                _ => DiffResultCount::default(),
            };

            summaries.push(SnapshotSummary {
                index: position + 1,
                id: id.clone(),
                count,
                time,
            });
            previous = current;
        }

        summaries
    }

    /// Resolve two 1-based index arguments and load both snapshots.
    ///
    /// # Errors
    ///
    /// `InvalidInput`/`SnapshotNotFound` for bad indices, or a load error.
    pub fn resolve_pair(&self, old: &str, new: &str) -> Result<(Snapshot, Snapshot)> {
        let revs = resolve_diff_revs(old, new, self.ids.len())?;
        Ok((self.load(revs.old)?, self.load(revs.new)?))
    }

    /// Diff the snapshots named by two 1-based index arguments.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_pair`]; additionally `MalformedKey` from the diff.
    pub fn diff(&self, old: &str, new: &str) -> Result<DiffResult> {
        let (old_snapshot, new_snapshot) = self.resolve_pair(old, new)?;
        let diff = crate::diff::compute_snapshot_diff(&old_snapshot, &new_snapshot, self.keys)?;
        Ok(diff)
    }
}
