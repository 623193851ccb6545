// crates.io
use anyhow::Result;
use clap::Parser;
// cig
use cig::cli::Cli;

fn main() -> Result<()> {
	color_eyre::install().map_err(|e| anyhow::anyhow!(e))?;
	tracing_subscriber::fmt::init();
	Cli::parse().run()?;

	Ok(())
}
