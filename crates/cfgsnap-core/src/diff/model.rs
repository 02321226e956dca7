//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use crate::keys::Scope;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Classification of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Key present only in the newer snapshot
    Added,
    /// Key present in both with different values
    Changed,
    /// Key present only in the older snapshot
    Removed,
}

/// One row of a computed diff.
///
/// Serialized with `is_added`/`is_removed`/`is_changed` flags next to `kind`;
/// the flags are derived and ignored when reading a line back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiffLine {
    /// Logical configuration path (composite key minus scope suffix)
    pub path: String,
    pub scope: Scope,
    pub scope_id: i64,
    /// Value in the older snapshot; empty for added keys
    pub old_value: String,
    /// Value in the newer snapshot; empty for removed keys
    pub new_value: String,
    pub kind: ChangeKind,
}

impl DiffLine {
    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }

    pub fn is_changed(&self) -> bool {
        self.kind == ChangeKind::Changed
    }
}

impl Serialize for DiffLine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DiffLine", 9)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("scope", &self.scope)?;
        state.serialize_field("scope_id", &self.scope_id)?;
        state.serialize_field("old_value", &self.old_value)?;
        state.serialize_field("new_value", &self.new_value)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("is_added", &self.is_added())?;
        state.serialize_field("is_removed", &self.is_removed())?;
        state.serialize_field("is_changed", &self.is_changed())?;
        state.end()
    }
}

/// Added/changed/removed counters of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResultCount {
    pub added: usize,
    pub changed: usize,
    pub removed: usize,
}

impl DiffResultCount {
    /// Total number of differing keys.
    pub fn changes(&self) -> usize {
        self.added + self.changed + self.removed
    }

    pub(crate) fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Changed => self.changed += 1,
            ChangeKind::Removed => self.removed += 1,
        }
    }
}

impl fmt::Display for DiffResultCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{} C{} R{}", self.added, self.changed, self.removed)
    }
}

/// Full output of comparing two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub lines: Vec<DiffLine>,
    pub count: DiffResultCount,
    /// 1-based catalog index of the older side
    pub from: usize,
    /// 1-based catalog index of the newer side
    pub to: usize,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
