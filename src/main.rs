use aqi_animator::cli::{run, Cli};
use aqi_animator::utils::init_logging;
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref()).context("failed to initialise logging")?;
    run(cli)?;
    Ok(())
}
