use std::path::PathBuf;

use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct LbmCli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// The path to the configuration file.
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        default_value = "config.toml"
    )]
    pub config: PathBuf,

    /// Increase output logging verbosity to DEBUG level.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress all output logging (overrides --verbose).
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Clone, Debug, Parser)]
pub enum Commands {
    Query(QueryCmd),
    LightBlock(LightBlockCmd),
}

#[derive(Clone, Debug, Parser)]
#[command(about = "Run an ABCI query against the chain, optionally proven")]
pub struct QueryCmd {
    /// Query path, e.g. `/store/bank/key`.
    #[arg(long)]
    pub path: String,

    /// Query data (the key), taken as raw UTF-8 bytes.
    #[arg(long, default_value = "")]
    pub data: String,

    /// Height to query at; 0 queries the latest height.
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// Ask the node for a proof of the result.
    #[arg(long)]
    pub prove: bool,
}

#[derive(Clone, Debug, Parser)]
#[command(about = "Fetch the light block at a height from the chain")]
pub struct LightBlockCmd {
    /// Height of the light block; the latest one if omitted.
    #[arg(long)]
    pub height: Option<u32>,
}
