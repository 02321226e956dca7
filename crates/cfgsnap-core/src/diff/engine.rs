//! Snapshot diff computation.
//!
//! The core entry point is [`compute_diff`], which compares two key/value
//! mappings and produces a [`DiffResult`].

use crate::diff::model::{ChangeKind, DiffLine, DiffResult, DiffResultCount};
use crate::errors::SnapshotError;
use crate::keys::KeyDecomposer;
use crate::model::{ConfigVars, Snapshot};
use std::collections::BTreeSet;

fn make_diff_line(
    keys: &KeyDecomposer,
    key: &str,
    old_value: &str,
    new_value: &str,
    kind: ChangeKind,
) -> Result<DiffLine, SnapshotError> {
    let parts = keys.decompose(key)?;
    Ok(DiffLine {
        path: parts.path,
        scope: parts.scope,
        scope_id: parts.scope_id,
        old_value: old_value.to_string(),
        new_value: new_value.to_string(),
        kind,
    })
}

/// Compute the ordered differences between two snapshot mappings.
///
/// `from_index` / `to_index` are 0-based catalog positions; the result
/// stores them 1-based.
///
/// Keys present in `new` are visited in ascending order and yield changed or
/// added lines; keys only in `old` follow, also in ascending order, as
/// removed lines. Equal values produce nothing.
///
/// # Errors
///
/// `SnapshotError::MalformedKey` if any differing key cannot be decomposed.
/// The whole diff fails rather than dropping the line.
pub fn compute_diff(
    old: &ConfigVars,
    new: &ConfigVars,
    from_index: usize,
    to_index: usize,
    keys: &KeyDecomposer,
) -> Result<DiffResult, SnapshotError> {
    let mut unmatched: BTreeSet<&str> = old.keys().map(String::as_str).collect();

    let mut new_keys: Vec<&str> = new.keys().map(String::as_str).collect();
    new_keys.sort_unstable();

    let mut lines = Vec::new();
    let mut count = DiffResultCount::default();

    for key in new_keys {
        unmatched.remove(key);
        let new_value = new.get(key).map(String::as_str).unwrap_or_default();
        match old.get(key) {
            Some(old_value) if old_value == new_value => {}
            Some(old_value) => {
                let line = make_diff_line(keys, key, old_value, new_value, ChangeKind::Changed)?;
                lines.push(line);
                count.record(ChangeKind::Changed);
            }
            None => {
                let line = make_diff_line(keys, key, "", new_value, ChangeKind::Added)?;
                lines.push(line);
                count.record(ChangeKind::Added);
            }
        }
    }

    // BTreeSet iteration keeps the removed group sorted.
    for key in unmatched {
        let old_value = old.get(key).map(String::as_str).unwrap_or_default();
        let line = make_diff_line(keys, key, old_value, "", ChangeKind::Removed)?;
        lines.push(line);
        count.record(ChangeKind::Removed);
    }

    tracing::debug!(
        from = from_index + 1,
        to = to_index + 1,
        line_count = lines.len(),
        "computed snapshot diff"
    );

    Ok(DiffResult {
        lines,
        count,
        from: from_index + 1,
        to: to_index + 1,
    })
}

/// Diff two loaded snapshots, taking the indices from their catalog identity.
///
/// # Errors
///
/// See [`compute_diff`].
pub fn compute_snapshot_diff(
    old: &Snapshot,
    new: &Snapshot,
    keys: &KeyDecomposer,
) -> Result<DiffResult, SnapshotError> {
    compute_diff(
        &old.vars,
        &new.vars,
        old.index.saturating_sub(1),
        new.index.saturating_sub(1),
        keys,
    )
}
