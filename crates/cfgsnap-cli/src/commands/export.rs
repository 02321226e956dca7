//! Export diff as a config:set script

use cfgsnap_core::diff::write_export;
use cfgsnap_engine::commands::engine_query::{EngineQuery, EngineQueryResult};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::{run_query, unexpected_result};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// 1-based index of the snapshot to start from
    pub a: String,

    /// 1-based index of the snapshot whose values are exported
    pub b: String,

    /// Write the script to FILE instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ExportArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let query = EngineQuery::SnapshotExport {
        a: args.a,
        b: args.b,
    };
    let EngineQueryResult::SnapshotExport(lines) = run_query(query, settings)? else {
        return Err(unexpected_result("snapshot_export").into());
    };

    match args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(&path)?);
            write_export(&mut out, &lines)?;
        }
        None => {
            let stdout = std::io::stdout();
            write_export(&mut stdout.lock(), &lines)?;
        }
    }
    Ok(())
}
