//! Main entry point for Cli

#![deny(warnings, missing_docs, trivial_casts, unused_qualifications)]
#![forbid(unsafe_code)]

use std::process::exit;

use clap::Parser;
use lbm_chain::query::QueryRequest;
use lbm_provider::cli::command::{Commands, LbmCli};
use lbm_provider::config::load_config;
use lbm_provider::ChainClient;
use tendermint::block::Height;
use tracing::error;
use tracing::metadata::LevelFilter;

#[tokio::main]
async fn main() {
    let cli = LbmCli::parse();
    let cfg = match load_config(cli.config.clone()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            exit(1);
        }
    };

    let log_level = if cli.quiet {
        LevelFilter::OFF
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        cfg.global.log_level.clone().into()
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    let client = match ChainClient::new(cfg.chain) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to initialize chain client: {e}");
            exit(1);
        }
    };

    let result = match &cli.command {
        Commands::Query(q) => {
            let mut request = QueryRequest::new(q.path.clone(), q.data.clone().into_bytes())
                .at_height(Height::from(q.height));
            request.prove = q.prove;

            client.query(request).await.map(|res| format!("{res:?}"))
        }
        Commands::LightBlock(lb) => client
            .light_block(lb.height.map(Height::from))
            .await
            .map(|lb| format!("{lb:?}")),
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    }
}
