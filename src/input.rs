//! CSV readers for the two input layouts.
//!
//! A single-row file lists addresses as `addr_1,addr_2,...,addr_n`; only its first record is
//! read. A multi-row file carries one `to_address,value` pair per line. Neither layout has a
//! header and surrounding whitespace is trimmed from every field.

// std
use std::{fs::File, path::Path};
// crates.io
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
// cig
use crate::error::{Error, Result};

/// A single `to_address,value` row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
	pub to: String,
	pub value: String,
}

fn reader(path: &Path) -> Result<Reader<File>> {
	let f = File::open(path).map_err(|e| Error::io(path, e))?;

	Ok(ReaderBuilder::new().has_headers(false).flexible(true).trim(Trim::All).from_reader(f))
}

fn line_of(record: &StringRecord) -> u64 {
	record.position().map_or(0, |p| p.line())
}

/// Whitespace-only lines trim down to nothing but empty fields.
fn is_blank(record: &StringRecord) -> bool {
	record.iter().all(str::is_empty)
}

fn check_token(line: u64, token: &str) -> Result<String> {
	if token.is_empty() {
		return Err(Error::MalformedRow { line, reason: "empty field".into() });
	}
	if token.contains('"') {
		return Err(Error::MalformedRow { line, reason: format!("field {token:?} contains a quote") });
	}

	Ok(token.to_owned())
}

/// `[0-9]+` or `[0-9]+.[0-9]+`.
fn is_plain_number(s: &str) -> bool {
	let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());

	match s.split_once('.') {
		Some((int, frac)) => digits(int) && digits(frac),
		None => digits(s),
	}
}

/// Read the tokens of the first record.
///
/// Blank lines before it are skipped. An empty file yields an empty list; callers decide
/// whether that is acceptable.
pub fn read_row(path: &Path) -> Result<Vec<String>> {
	let mut rdr = reader(path)?;
	let mut record = StringRecord::new();

	loop {
		if !rdr.read_record(&mut record)? {
			return Ok(Vec::new());
		}
		if !is_blank(&record) {
			break;
		}
	}

	let line = line_of(&record);

	record.iter().map(|t| check_token(line, t)).collect()
}

/// Read every `to_address,value` record.
///
/// Blank lines and fields past the second are ignored.
pub fn read_transfers(path: &Path) -> Result<Vec<Transfer>> {
	let mut rdr = reader(path)?;

	rdr.records()
		.filter(|r| !r.as_ref().is_ok_and(is_blank))
		.map(|r| {
			let record = r?;
			let line = line_of(&record);

			if record.len() < 2 {
				return Err(Error::MalformedRow {
					line,
					reason: format!("expected `address,value`, found {} field(s)", record.len()),
				});
			}
			if record.len() > 2 {
				tracing::warn!("line {line}: ignoring {} extra field(s)", record.len() - 2);
			}

			let to = check_token(line, &record[0])?;
			let value = &record[1];

			if !is_plain_number(value) {
				return Err(Error::InvalidValue { line, value: value.to_owned() });
			}

			Ok(Transfer { to, value: value.to_owned() })
		})
		.collect()
}
