//! Snapshot identity and in-memory representation.

use crate::model::record::SnapshotRecord;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Composite key → value mapping of one snapshot.
///
/// An empty string value is how the source represents NULL.
pub type ConfigVars = BTreeMap<String, String>;

/// File-name layout of a snapshot identifier; the embedded UTC timestamp
/// makes lexicographic order chronological.
pub const SNAPSHOT_ID_FORMAT: &str = "snapshot-%Y-%m-%d_%H-%M-%S.json";

/// Prefix shared by all snapshot identifiers.
pub const SNAPSHOT_ID_PREFIX: &str = "snapshot-";

/// Suffix shared by all snapshot identifiers.
pub const SNAPSHOT_ID_SUFFIX: &str = ".json";

/// Stored identifier of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl SnapshotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for a snapshot taken at `at`.
    pub fn for_time(at: DateTime<Utc>) -> Self {
        Self(at.format(SNAPSHOT_ID_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the identifier follows the `snapshot-*.json` naming.
    pub fn is_snapshot_name(name: &str) -> bool {
        name.starts_with(SNAPSHOT_ID_PREFIX) && name.ends_with(SNAPSHOT_ID_SUFFIX)
    }

    /// Timestamp embedded in the identifier, if it parses.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.0, SNAPSHOT_ID_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SnapshotId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One loaded snapshot: identity, metadata and its full mapping.
///
/// Immutable once constructed; the catalog and the engine only ever read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// 1-based position in catalog order
    pub index: usize,
    pub id: SnapshotId,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub vars: ConfigVars,
}

impl Snapshot {
    /// Attach catalog identity to a persisted record.
    ///
    /// `created_at` falls back to the current time when the identifier does
    /// not embed a parseable timestamp.
    pub fn from_record(index: usize, id: SnapshotId, record: SnapshotRecord) -> Self {
        let created_at = id.timestamp().unwrap_or_else(Utc::now);
        Self {
            index,
            id,
            created_at,
            message: record.message,
            vars: record.vars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_for_time_uses_file_layout() {
        let at = Utc.with_ymd_and_hms(2015, 3, 9, 14, 5, 7).unwrap();
        let id = SnapshotId::for_time(at);
        assert_eq!(id.as_str(), "snapshot-2015-03-09_14-05-07.json");
        assert_eq!(id.timestamp(), Some(at));
    }

    #[test]
    fn test_ids_sort_chronologically() {
        let earlier = SnapshotId::for_time(Utc.with_ymd_and_hms(2015, 12, 31, 23, 59, 59).unwrap());
        let later = SnapshotId::for_time(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap());
        assert!(earlier < later);
    }

    #[test]
    fn test_unparseable_timestamp_is_none() {
        assert_eq!(SnapshotId::new("snapshot-latest.json").timestamp(), None);
    }

    #[test]
    fn test_snapshot_name_filter() {
        let saved = "snapshot-2015-03-09_14-05-07.json";
        let in_flight = "snapshot-2015-03-09_14-05-07.tmp";
        assert!(SnapshotId::is_snapshot_name(saved));
        assert!(!SnapshotId::is_snapshot_name(in_flight));
        assert!(!SnapshotId::is_snapshot_name("notes.json"));
    }

    #[test]
    fn test_from_record_falls_back_to_now() {
        let before = Utc::now();
        let snap = Snapshot::from_record(
            1,
            SnapshotId::new("snapshot-odd.json"),
            SnapshotRecord::new("m", ConfigVars::new()),
        );
        assert!(snap.created_at >= before);
        assert_eq!(snap.message, "m");
    }
}
