mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

#[cfg(test)]
mod testing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("absence_predictor=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
