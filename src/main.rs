use clap::Parser;
use station_mapper::cli::{run, Cli};
use station_mapper::error::Result;
use tracing::Level;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    run(cli)
}
