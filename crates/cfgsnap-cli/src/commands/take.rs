//! Take snapshot command

use cfgsnap_core::errors::{ExError, ExErrorKind};
use cfgsnap_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use cfgsnap_store::{FsSnapshotStore, SqliteConfigSource};
use clap::Args;
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct TakeArgs {
    /// Free-form note stored with the snapshot
    #[arg(long, short, default_value = "")]
    pub message: String,

    /// SQLite database holding core_config_data (overrides [source] database)
    #[arg(long)]
    pub database: Option<PathBuf>,
}

pub fn execute(args: TakeArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let database = args
        .database
        .or_else(|| settings.database.clone())
        .ok_or_else(|| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("snapshot_take")
                .with_message("no configuration database; pass --database or set [source] database")
        })?;

    let source = SqliteConfigSource::new(database);
    let store = FsSnapshotStore::new(&settings.snapshot_dir);

    let EngineCommandResult::SnapshotTaken(result) = apply_engine_command(
        EngineCommand::TakeSnapshot {
            message: args.message,
        },
        &source,
        &store,
    )?;

    println!("{}", result.snapshot_id);
    Ok(())
}
