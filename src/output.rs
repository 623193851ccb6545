// std
use std::{fs, io::Write, path::Path};
// crates.io
use tempfile::NamedTempFile;
// cig
use crate::error::{Error, Result};

/// Replace `path` with `data`.
///
/// The bytes land in a temporary file next to `path` first, which is renamed over it once
/// flushed. An existing `path` keeps its permissions. On failure the temporary file is removed
/// and `path` is left as it was.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
	let dir = match path.parent() {
		Some(d) if !d.as_os_str().is_empty() => d,
		_ => Path::new("."),
	};

	fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

	let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;

	tmp.write_all(data).map_err(|e| Error::io(path, e))?;
	tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;

	if let Ok(meta) = fs::metadata(path) {
		tmp.as_file().set_permissions(meta.permissions()).map_err(|e| Error::io(path, e))?;
	}

	tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

	tracing::debug!("wrote {} bytes to {}", data.len(), path.display());

	Ok(())
}
