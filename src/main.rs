mod cli;
mod facts;
mod output;
mod probe;
mod telemetry;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use facts::{binary_version::BinaryVersionFact, Fact, FactResult};
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    telemetry::init(&args.log_level);

    let timeout = Duration::from_secs(args.timeout_secs);

    let selected: Vec<Box<dyn Fact>> = match &args.command {
        Commands::Run(run_args) => facts::registry(timeout)
            .into_iter()
            .filter(|fact| run_args.should_resolve(fact.name()))
            .collect(),
        Commands::Probe(probe_args) => probe_args
            .binaries
            .iter()
            .map(|binary| Box::new(BinaryVersionFact::new(binary, timeout)) as Box<dyn Fact>)
            .collect(),
    };

    let mut results = vec![];

    for fact in &selected {
        info!(fact = fact.name(), binary = fact.binary(), "Resolving fact");
        let resolution = fact.resolve().await;
        if let Err(e) = &resolution {
            error!(fact = fact.name(), "Error resolving fact: {:#}", e);
        }
        results.push(FactResult::from_resolution(&**fact, resolution));
    }

    output::print_results(&results);

    std::process::exit(output::exit_code(&results));
}
