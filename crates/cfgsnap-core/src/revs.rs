//! Resolution of operator-supplied 1-based snapshot indices.

use crate::errors::SnapshotError;

/// A validated pair of catalog positions, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffRevs {
    pub old: usize,
    pub new: usize,
}

/// Parse and validate one 1-based index against a catalog of `len` entries.
///
/// Returns the 0-based position.
///
/// # Errors
///
/// - `InvalidIndex` — `input` is not an integer
/// - `SnapshotNotFound` — the index is outside `1..=len`
pub fn resolve_index(input: &str, len: usize) -> Result<usize, SnapshotError> {
    let index: i64 = input
        .trim()
        .parse()
        .map_err(|_| SnapshotError::InvalidIndex {
            input: input.to_string(),
        })?;

    if index < 1 || index as u64 > len as u64 {
        return Err(SnapshotError::SnapshotNotFound {
            index,
            available: len,
        });
    }
    Ok((index - 1) as usize)
}

/// Resolve the two index arguments of a diff or export.
///
/// Either order is accepted; `old` is always the first argument.
///
/// # Errors
///
/// See [`resolve_index`].
pub fn resolve_diff_revs(old: &str, new: &str, len: usize) -> Result<DiffRevs, SnapshotError> {
    Ok(DiffRevs {
        old: resolve_index(old, len)?,
        new: resolve_index(new, len)?,
    })
}
