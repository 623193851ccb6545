// std
use std::path::{Path, PathBuf};
// crates.io
use serde::Deserialize;
// cig
use crate::{
	error::{Error, Result},
	input, output,
	template::{self, Template},
};

/// One conversion: read `read_path`, render it with `template`, replace `write_path`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawJob")]
pub struct Job {
	pub read_path: PathBuf,
	pub write_path: PathBuf,
	pub template: Template,
}

/// A job table before its template keys are checked.
#[derive(Deserialize)]
struct RawJob {
	read_path: PathBuf,
	write_path: PathBuf,
	#[serde(flatten)]
	template: toml::Table,
}
impl TryFrom<RawJob> for Job {
	type Error = String;

	fn try_from(raw: RawJob) -> std::result::Result<Self, Self::Error> {
		let keys: &[&str] = match raw.template.get("template").and_then(toml::Value::as_str) {
			Some("pair_with_constant") => &["template", "token_address"],
			_ => &["template"],
		};

		if let Some(k) = raw.template.keys().find(|k| !keys.contains(&k.as_str())) {
			return Err(format!("unknown field `{k}` in job"));
		}

		let template: Template = raw.template.try_into().map_err(|e| format!("{e}"))?;

		Ok(Self { read_path: raw.read_path, write_path: raw.write_path, template })
	}
}

fn non_empty<T>(path: &Path, entries: &[T]) -> Result<()> {
	if entries.is_empty() {
		Err(Error::EmptyInput { path: path.to_path_buf() })
	} else {
		Ok(())
	}
}

pub fn generate_input(job: &Job) -> Result<()> {
	let Job { read_path, write_path, template } = job;
	let (n, text) = match template {
		Template::PairWithConstant { token_address } => {
			if token_address.is_empty() || token_address.contains('"') {
				return Err(Error::InvalidToken { token: token_address.to_owned() });
			}

			let beneficiaries = input::read_row(read_path)?;

			non_empty(read_path, &beneficiaries)?;

			(beneficiaries.len(), template::pair_with_constant(token_address, &beneficiaries))
		},
		Template::PairFromRow => {
			let transfers = input::read_transfers(read_path)?;

			non_empty(read_path, &transfers)?;

			(transfers.len(), template::pair_from_row(&transfers))
		},
		Template::ArrayLiteral => {
			let addresses = input::read_row(read_path)?;

			(addresses.len(), template::array_literal(&addresses))
		},
	};

	output::write_atomic(write_path, text.as_bytes())?;

	tracing::info!(
		"{}: {n} entries from {} into {}",
		template.kind(),
		read_path.display(),
		write_path.display()
	);

	Ok(())
}
