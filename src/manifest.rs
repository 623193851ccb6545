//! Batch conversions described in a TOML file.
//!
//! ```toml
//! [[mock]]
//! count = 250
//! path  = "./read/mock_whitelist_addresses.csv"
//!
//! [[job]]
//! template      = "pair_with_constant"
//! read_path     = "./read/timelock_beneficiary_addresses.csv"
//! write_path    = "./write/timelock_constructor_input.txt"
//! token_address = "0x0"
//! ```

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// crates.io
use serde::Deserialize;
// cig
use crate::{
	error::{Error, Result},
	generate::{self, Job},
	mock,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
	#[serde(default)]
	pub mock: Vec<Mock>,
	#[serde(default)]
	pub job: Vec<Job>,
}
impl Manifest {
	pub fn load(path: &Path) -> Result<Self> {
		let s = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

		Self::parse(path, &s)
	}

	pub fn parse(path: &Path, s: &str) -> Result<Self> {
		toml::from_str(s).map_err(|source| Error::Manifest { path: path.to_path_buf(), source })
	}

	/// Mocks first, then jobs in file order. Stops at the first error.
	pub fn run(&self) -> Result<()> {
		for m in &self.mock {
			mock::generate_addresses(m.count, &m.path)?;
		}
		for j in &self.job {
			generate::generate_input(j)?;
		}

		tracing::info!("ran {} mock(s) and {} job(s)", self.mock.len(), self.job.len());

		Ok(())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Mock {
	pub count: u64,
	pub path: PathBuf,
}
