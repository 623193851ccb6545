//! Fixture addresses for exercising the converters.
//!
//! The suffix is the decimal index, so these are not real (or even hex-valid) addresses; they
//! only have the right shape.

// std
use std::path::Path;
// crates.io
use csv::Writer;
// cig
use crate::{
	error::{Error, Result},
	output,
};

/// `0x` followed by `i` left-padded with zeros to 40 characters.
pub fn generate_address(i: u64) -> String {
	format!("0x{i:0>40}")
}

/// Write `0..n` as a single CSV row to `path`.
pub fn generate_addresses(n: u64, path: &Path) -> Result<()> {
	if n == 0 {
		return Err(Error::EmptyInput { path: path.to_path_buf() });
	}

	let mut wtr = Writer::from_writer(Vec::new());

	wtr.write_record((0..n).map(generate_address))?;

	let data = wtr.into_inner().map_err(|e| Error::io(path, e.into_error()))?;

	output::write_atomic(path, &data)?;

	tracing::info!("generated {n} mock addresses into {}", path.display());

	Ok(())
}
