pub mod cmd;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "querybridge", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where the query parameters come from. Falls back to `query` in the config.
#[derive(Debug, Args, Default)]
pub struct QueryArgs {
    /// Raw query string, e.g. `?a=1&b=2`
    #[arg(long, short, conflicts_with = "url")]
    pub query: Option<String>,
    /// Full page URL whose query component is captured
    #[arg(long, short)]
    pub url: Option<String>,
}

#[derive(Debug, Parser)]
pub struct CmdRun {
    /// Compiled WASM module to run
    #[arg(long, short)]
    pub module: PathBuf,
    #[command(flatten)]
    pub source: QueryArgs,
    #[arg(long, short)]
    pub config: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct CmdInspect {
    #[command(flatten)]
    pub source: QueryArgs,
    #[arg(long, short)]
    pub config: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a module against the captured parameters
    Run(CmdRun),
    /// Print the captured parameters as JSON
    Inspect(CmdInspect),
}
