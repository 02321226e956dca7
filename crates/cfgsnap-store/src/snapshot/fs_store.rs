//! Filesystem-based snapshot store
//!
//! One file per snapshot under a root directory, named
//! `snapshot-YYYY-MM-DD_HH-MM-SS.json` after the UTC save time.

use crate::errors::{io_error, snapshot_exists, store_unavailable, Result};
use crate::snapshot::atomic::atomic_write;
use cfgsnap_core::model::{RecordFormat, SnapshotId, SnapshotRecord};
use cfgsnap_core::store::SnapshotStore;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem snapshot store
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    /// Create a store rooted at `root`; the directory is created on first save
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, id: &SnapshotId) -> PathBuf {
        self.root.join(id.as_str())
    }

    /// Save `record` under the identifier derived from `at`.
    ///
    /// Fails with `AlreadyExists` instead of overwriting an existing file.
    /// The existence check and the write are not one atomic step.
    pub fn save_at(&self, record: &SnapshotRecord, at: DateTime<Utc>) -> Result<SnapshotId> {
        let id = SnapshotId::for_time(at);
        let path = self.path_of(&id);

        if path.exists() {
            return Err(snapshot_exists(id.as_str()));
        }

        let bytes = record.encode()?;
        atomic_write(&path, &bytes)?;

        tracing::debug!(snapshot_id = %id, vars = record.vars.len(), "snapshot written");
        Ok(id)
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn list_snapshot_ids(&self) -> Result<Vec<SnapshotId>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(store_unavailable("list_snapshot_ids", &self.root, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| store_unavailable("list_snapshot_ids", &self.root, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            if is_file && SnapshotId::is_snapshot_name(&name) {
                ids.push(SnapshotId::new(name));
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn load(&self, id: &SnapshotId) -> Result<SnapshotRecord> {
        let path = self.path_of(id);
        let bytes = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => io_error("load_snapshot", e).with_entity_id(id.as_str()),
            _ => store_unavailable("load_snapshot", &path, e),
        })?;

        let (record, format) =
            SnapshotRecord::decode(&bytes).map_err(|e| e.with_entity_id(id.as_str()))?;
        if format == RecordFormat::Legacy {
            tracing::debug!(snapshot_id = %id, "read legacy snapshot format");
        }
        Ok(record)
    }

    fn save(&self, record: &SnapshotRecord) -> Result<SnapshotId> {
        self.save_at(record, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgsnap_core::errors::ExErrorKind;
    use cfgsnap_core::model::ConfigVars;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn setup_store() -> (FsSnapshotStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FsSnapshotStore::new(temp_dir.path().join(".snapshots"));
        (store, temp_dir)
    }

    fn record(message: &str, pairs: &[(&str, &str)]) -> SnapshotRecord {
        let vars: ConfigVars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SnapshotRecord::new(message, vars)
    }

    #[test]
    fn test_missing_root_lists_empty() {
        let (store, _dir) = setup_store();
        assert!(store.list_snapshot_ids().unwrap().is_empty());
    }

    #[test]
    fn test_save_names_file_after_utc_time() {
        let (store, _dir) = setup_store();
        let at = Utc.with_ymd_and_hms(2016, 3, 4, 5, 6, 7).unwrap();

        let id = store.save_at(&record("m", &[]), at).unwrap();

        assert_eq!(id.as_str(), "snapshot-2016-03-04_05-06-07.json");
        assert!(store.path_of(&id).is_file());
    }

    #[test]
    fn test_same_second_save_is_rejected() {
        let (store, _dir) = setup_store();
        let at = Utc.with_ymd_and_hms(2016, 3, 4, 5, 6, 7).unwrap();
        store.save_at(&record("first", &[]), at).unwrap();

        let err = store.save_at(&record("second", &[]), at).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::AlreadyExists);
        let id = SnapshotId::for_time(at);
        assert_eq!(store.load(&id).unwrap().message, "first");
    }

    #[test]
    fn test_foreign_files_are_ignored() {
        let (store, _dir) = setup_store();
        let at = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
        store.save_at(&record("", &[]), at).unwrap();
        fs::write(store.root().join("notes.txt"), b"x").unwrap();
        fs::write(store.root().join("snapshot-2016-01-02_00-00-00.tmp"), b"x").unwrap();
        fs::create_dir(store.root().join("snapshot-dir.json")).unwrap();

        let ids = store.list_snapshot_ids().unwrap();

        assert_eq!(ids, vec![SnapshotId::for_time(at)]);
    }

    #[test]
    fn test_load_missing_snapshot() {
        let (store, _dir) = setup_store();
        let err = store
            .load(&SnapshotId::new("snapshot-2000-01-01_00-00-00.json"))
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }

    #[test]
    fn test_load_corrupt_snapshot() {
        let (store, _dir) = setup_store();
        fs::create_dir_all(store.root()).unwrap();
        let id = SnapshotId::new("snapshot-2000-01-01_00-00-00.json");
        fs::write(store.path_of(&id), b"{not json").unwrap();

        let err = store.load(&id).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Serialization);
        assert_eq!(err.entity_id(), Some(id.as_str()));
    }
}
