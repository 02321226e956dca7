//! Diff snapshots command

use cfgsnap_engine::commands::engine_query::{EngineQuery, EngineQueryResult};
use clap::Args;

use super::{run_query, unexpected_result, OutputFormat};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// 1-based index of the older snapshot (see `list`)
    pub a: String,

    /// 1-based index of the newer snapshot
    pub b: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: DiffArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let query = EngineQuery::SnapshotDiff {
        a: args.a,
        b: args.b,
    };
    let EngineQueryResult::SnapshotDiff(result) = run_query(query, settings)? else {
        return Err(unexpected_result("snapshot_diff").into());
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result.diff)?),
        OutputFormat::Text => print!("{}", result.human_summary),
    }
    Ok(())
}
