//! Configuration file loading
//!
//! Precedence: command-line flag > `cfgsnap.toml` > built-in default.

use cfgsnap_core::errors::{ExError, ExErrorKind};
use cfgsnap_core::logging_facility::Profile;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "cfgsnap.toml";
pub const DEFAULT_SNAPSHOT_DIR: &str = ".snapshots";

/// On-disk shape of `cfgsnap.toml`; every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub snapshot_dir: Option<PathBuf>,
    pub log_profile: Option<String>,
    #[serde(default)]
    pub source: SourceSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    pub database: Option<PathBuf>,
}

/// Effective settings after applying precedence.
#[derive(Debug, Clone)]
pub struct Settings {
    pub snapshot_dir: PathBuf,
    pub log_profile: Profile,
    pub database: Option<PathBuf>,
}

fn invalid_config(path: &Path, message: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_entity_id(path.display().to_string())
        .with_message(message)
}

/// Load the configuration file.
///
/// Without `explicit`, a missing `cfgsnap.toml` yields the defaults. A named
/// file that is missing, or any file that fails to parse, is `InvalidInput`.
pub fn load(explicit: Option<&Path>) -> Result<ConfigFile, ExError> {
    let path = explicit.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && explicit.is_none() => {
            return Ok(ConfigFile::default());
        }
        Err(e) => return Err(invalid_config(path, format!("cannot read config: {}", e))),
    };
    toml::from_str(&text).map_err(|e| invalid_config(path, format!("malformed config: {}", e)))
}

impl Settings {
    pub fn resolve(file: ConfigFile, dir_flag: Option<PathBuf>) -> Result<Self, ExError> {
        let log_profile = match file.log_profile.as_deref() {
            Some(name) => name.parse::<Profile>().map_err(|e| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("load_config")
                    .with_message(e)
            })?,
            None => Profile::Development,
        };
        Ok(Self {
            snapshot_dir: dir_flag
                .or(file.snapshot_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_DIR)),
            log_profile,
            database: file.source.database,
        })
    }
}
