//! List snapshots command

use cfgsnap_engine::commands::engine_query::{EngineQuery, EngineQueryResult};
use clap::Args;

use super::{run_query, unexpected_result, OutputFormat};
use crate::config::Settings;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn execute(args: ListArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_query(EngineQuery::SnapshotList, settings)?;
    let EngineQueryResult::SnapshotList(summaries) = result else {
        return Err(unexpected_result("snapshot_list").into());
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text if summaries.is_empty() => println!("No snapshots taken yet."),
        OutputFormat::Text => {
            for summary in &summaries {
                println!("{}", summary);
            }
        }
    }
    Ok(())
}
