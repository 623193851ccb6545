// std
use std::path::{Path, PathBuf};
// crates.io
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
// cig
use crate::{
	generate::{self, Job},
	manifest::Manifest,
	mock,
	template::Template,
};

#[derive(Debug, Parser)]
#[command(
	version = concat!(
		env!("CARGO_PKG_VERSION"),
		"-",
		env!("VERGEN_GIT_SHA"),
		"-",
		env!("VERGEN_CARGO_TARGET_TRIPLE"),
	),
	about,
	rename_all = "kebab",
)]
pub struct Cli {
	#[command(subcommand)]
	pub subcmd: SubCmd,
}
impl Cli {
	pub fn run(&self) -> Result<()> {
		match &self.subcmd {
			SubCmd::Timelock { read, write, token_address } => convert(
				read,
				write.as_deref(),
				Template::PairWithConstant { token_address: token_address.to_owned() },
			)?,
			SubCmd::Transfer { read, write } =>
				convert(read, write.as_deref(), Template::PairFromRow)?,
			SubCmd::Whitelist { read, write } =>
				convert(read, write.as_deref(), Template::ArrayLiteral)?,
			SubCmd::Mock { csv, count, array } => {
				mock::generate_addresses(*count, csv)?;

				if let Some(array) = array {
					convert(csv, Some(array.as_path()), Template::ArrayLiteral)?;
				}
			},
			SubCmd::Run { manifest } => Manifest::load(manifest)?.run()?,
		}

		Ok(())
	}
}

#[derive(Debug, Parser)]
pub enum SubCmd {
	/// Generate timelock constructor inputs, one `"<token>","<beneficiary>"` line per address of
	/// a single-row CSV.
	Timelock {
		/// Path to the CSV file of beneficiary addresses.
		#[arg(value_name = "PATH")]
		read: PathBuf,
		/// Output path, defaults to a timestamped file in the working directory.
		#[arg(long, short, value_name = "PATH")]
		write: Option<PathBuf>,
		/// Token contract address placed on every line.
		#[arg(long, value_name = "ADDRESS")]
		token_address: String,
	},
	/// Generate transfer inputs, one `"<to>",<value>` line per row of a `to,value` CSV.
	Transfer {
		/// Path to the CSV file.
		#[arg(value_name = "PATH")]
		read: PathBuf,
		/// Output path, defaults to a timestamped file in the working directory.
		#[arg(long, short, value_name = "PATH")]
		write: Option<PathBuf>,
	},
	/// Generate an address array literal from a single-row CSV.
	Whitelist {
		/// Path to the CSV file of whitelisted addresses.
		#[arg(value_name = "PATH")]
		read: PathBuf,
		/// Output path, defaults to a timestamped file in the working directory.
		#[arg(long, short, value_name = "PATH")]
		write: Option<PathBuf>,
	},
	/// Generate a single-row CSV of mock addresses.
	Mock {
		/// Path to the CSV file to create.
		#[arg(value_name = "PATH")]
		csv: PathBuf,
		/// Number of addresses.
		#[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
		count: u64,
		/// Also write the array literal of the generated addresses here.
		#[arg(long, value_name = "PATH")]
		array: Option<PathBuf>,
	},
	/// Run every conversion listed in a TOML manifest.
	Run {
		/// Path to the manifest.
		#[arg(value_name = "PATH")]
		manifest: PathBuf,
	},
}

/// `<kind>-<%F-%H-%M-%S>.txt` in the working directory.
fn default_write_path(template: &Template, at: DateTime<Utc>) -> PathBuf {
	PathBuf::from(format!("{}-{}.txt", template.kind(), at.format("%F-%H-%M-%S")))
}

fn convert(read: &Path, write: Option<&Path>, template: Template) -> Result<()> {
	let write_path = write
		.map(Path::to_path_buf)
		.unwrap_or_else(|| default_write_path(&template, Utc::now()));

	generate::generate_input(&Job { read_path: read.to_owned(), write_path, template })?;

	Ok(())
}
