use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_partitioner::config::{Cli, PartitionConfig};
use graph_partitioner::partitioner;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .init();

    let config: PartitionConfig = cli.into();

    match partitioner::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "partitioning failed");
            ExitCode::FAILURE
        }
    }
}
