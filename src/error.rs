// std
use std::{
	io::{self, ErrorKind},
	path::{Path, PathBuf},
};
// crates.io
use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
	#[error("file not found: {}", path.display())]
	FileNotFound { path: PathBuf },
	#[error("permission denied: {}", path.display())]
	FilePermission { path: PathBuf },
	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	#[error("line {line} is malformed: {reason}")]
	MalformedRow { line: u64, reason: String },
	#[error("no entries for {}", path.display())]
	EmptyInput { path: PathBuf },
	#[error("line {line} has a non-numeric value {value:?}")]
	InvalidValue { line: u64, value: String },
	#[error("invalid token {token:?}")]
	InvalidToken { token: String },
	#[error("invalid manifest {}: {source}", path.display())]
	Manifest {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}
impl Error {
	/// Classify an I/O failure on `path` by its kind.
	pub fn io(path: &Path, source: io::Error) -> Self {
		let path = path.to_path_buf();

		match source.kind() {
			ErrorKind::NotFound => Self::FileNotFound { path },
			ErrorKind::PermissionDenied => Self::FilePermission { path },
			_ => Self::Io { path, source },
		}
	}
}
