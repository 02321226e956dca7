//! Persisted snapshot record and its two on-disk formats.
//!
//! Current format: `{"Message": "...", "Vars": {"<key>": "<value>", ...}}`.
//! Legacy format: the bare `{"<key>": "<value>", ...}` mapping with no message.
//! Both remain readable; writes always use the current format.

use crate::errors::{ExError, ExErrorKind};
use crate::model::snapshot::ConfigVars;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The persisted content of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotRecord {
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Vars", deserialize_with = "nullable_vars")]
    pub vars: ConfigVars,
}

impl SnapshotRecord {
    pub fn new(message: impl Into<String>, vars: ConfigVars) -> Self {
        Self {
            message: message.into(),
            vars,
        }
    }

    /// Encode in the current format: compact JSON plus a trailing newline.
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails.
    pub fn encode(&self) -> Result<Vec<u8>, ExError> {
        let mut bytes = serde_json::to_vec(self).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("encode_snapshot_record")
                .with_message(e.to_string())
        })?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Decode either record format, reporting which one was found.
    ///
    /// # Errors
    ///
    /// `Serialization` if the bytes match neither format.
    pub fn decode(bytes: &[u8]) -> Result<(SnapshotRecord, RecordFormat), ExError> {
        let stored: StoredRecord = serde_json::from_slice(bytes).map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("decode_snapshot_record")
                .with_message(format!(
                    "snapshot record matches neither the current nor the legacy format: {}",
                    e
                ))
        })?;
        Ok(stored.into_record())
    }
}

/// A stored mapping as read from disk; a `null` value stands for "".
pub type NullableVars = BTreeMap<String, Option<String>>;

fn nulls_as_empty(raw: NullableVars) -> ConfigVars {
    raw.into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect()
}

/// `Vars` may be `null` as a whole or hold `null` values.
fn nullable_vars<'de, D>(deserializer: D) -> Result<ConfigVars, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NullableVars>::deserialize(deserializer)?;
    Ok(nulls_as_empty(raw.unwrap_or_default()))
}

/// Which on-disk format a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Current,
    Legacy,
}

/// The two accepted on-disk shapes.
///
/// `Current` requires a `Vars` field, so a legacy bare mapping never
/// matches it and falls through to `Legacy`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Current(SnapshotRecord),
    Legacy(NullableVars),
}

impl StoredRecord {
    /// Upgrade to the in-memory record shape; legacy records get an empty message.
    pub fn into_record(self) -> (SnapshotRecord, RecordFormat) {
        match self {
            StoredRecord::Current(record) => (record, RecordFormat::Current),
            StoredRecord::Legacy(raw) => (
                SnapshotRecord {
                    message: String::new(),
                    vars: nulls_as_empty(raw),
                },
                RecordFormat::Legacy,
            ),
        }
    }
}
