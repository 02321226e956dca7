//! SQLite configuration source
//!
//! Reads the flat `core_config_data` table and flattens each row into a
//! composite key `<path>-<scope>-<scope_id>`.

use crate::db;
use crate::errors::{from_rusqlite, source_unavailable, Result};
use cfgsnap_core::keys::compose;
use cfgsnap_core::model::ConfigVars;
use cfgsnap_core::store::ConfigSource;
use rusqlite::Connection;
use std::path::PathBuf;

const SELECT_CONFIG: &str = "SELECT scope, scope_id, path, value FROM core_config_data";

/// Reads the live configuration from a SQLite database file
#[derive(Debug, Clone)]
pub struct SqliteConfigSource {
    path: PathBuf,
}

impl SqliteConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for SqliteConfigSource {
    fn fetch_current_config(&self) -> Result<ConfigVars> {
        let conn = db::open_read_only(&self.path).map_err(|e| {
            source_unavailable("fetch_current_config", e)
                .with_entity_id(self.path.display().to_string())
        })?;
        read_config(&conn).map_err(|e| source_unavailable("fetch_current_config", e))
    }
}

/// Read every row of `core_config_data`.
///
/// NULL values become the empty string.
pub fn read_config(conn: &Connection) -> Result<ConfigVars> {
    let mut stmt = conn.prepare(SELECT_CONFIG).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([], |row| {
            let scope: String = row.get(0)?;
            let scope_id: i64 = row.get(1)?;
            let path: String = row.get(2)?;
            let value: Option<String> = row.get(3)?;
            Ok((
                compose(&path, &scope, &scope_id.to_string()),
                value.unwrap_or_default(),
            ))
        })
        .map_err(from_rusqlite)?;

    let mut vars = ConfigVars::new();
    for row in rows {
        let (key, value) = row.map_err(from_rusqlite)?;
        vars.insert(key, value);
    }

    tracing::debug!(vars = vars.len(), "read current configuration");
    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfgsnap_core::errors::ExErrorKind;

    fn setup_conn() -> Connection {
        let conn = db::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE core_config_data (
                config_id INTEGER PRIMARY KEY,
                scope TEXT NOT NULL DEFAULT 'default',
                scope_id INTEGER NOT NULL DEFAULT 0,
                path TEXT NOT NULL,
                value TEXT
            );
            INSERT INTO core_config_data (scope, scope_id, path, value) VALUES
                ('default', 0, 'web/secure/base_url', 'https://example.test/'),
                ('stores', 7, 'general/locale/timezone', 'Europe/Berlin'),
                ('websites', 1, 'design/head/default_title', NULL);",
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_rows_become_composite_keys() {
        let vars = read_config(&setup_conn()).unwrap();

        assert_eq!(vars.len(), 3);
        assert_eq!(
            vars.get("web/secure/base_url-default-0")
                .map(String::as_str),
            Some("https://example.test/")
        );
        assert_eq!(
            vars.get("general/locale/timezone-stores-7")
                .map(String::as_str),
            Some("Europe/Berlin")
        );
    }

    #[test]
    fn test_null_value_is_empty_string() {
        let vars = read_config(&setup_conn()).unwrap();
        assert_eq!(
            vars.get("design/head/default_title-websites-1")
                .map(String::as_str),
            Some("")
        );
    }

    #[test]
    fn test_missing_table_fails() {
        let conn = db::open_in_memory().unwrap();
        let err = read_config(&conn).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Persistence);
    }

    #[test]
    fn test_missing_database_is_source_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = SqliteConfigSource::new(dir.path().join("absent.db"));
        let err = source.fetch_current_config().unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::SourceUnavailable);
    }
}
