//! Persisting the rendered preset and checking committed copies for drift.

#[cfg(unix)]
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use dv_tokens::TokenSet;
use tracing::{info, warn};

use crate::compile::compile;
use crate::error::{PresetError, Result};
use crate::extension::Preset;
use crate::render::{ModuleFormat, extract_preset, render};

/// Writes `contents` to `path` via a temporary file in the same directory.
///
/// The previous file, if any, is replaced in one rename and its permissions
/// carry over. A new file gets `0o644` less the umask. On failure no partial
/// file is left behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let write_err = |error: std::io::Error| PresetError::Write {
		path: path.to_path_buf(),
		error,
	};
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut builder = tempfile::Builder::new();
	#[cfg(unix)]
	{
		use std::os::unix::fs::PermissionsExt;
		builder.permissions(Permissions::from_mode(0o644));
	}
	let mut file = builder.tempfile_in(dir).map_err(write_err)?;
	file.write_all(contents.as_bytes()).map_err(write_err)?;
	match std::fs::metadata(path) {
		Ok(existing) => file
			.as_file()
			.set_permissions(existing.permissions())
			.map_err(write_err)?,
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
		Err(error) => return Err(write_err(error)),
	}
	file.as_file().sync_all().map_err(write_err)?;
	file.persist(path).map_err(|e| write_err(e.error))?;
	Ok(())
}

/// Loads tokens from `tokens_dir`, compiles them and writes the module to `output`.
///
/// Nothing is written unless every step before the write succeeds.
pub fn generate(
	tokens_dir: &Path,
	output: &Path,
	format: ModuleFormat,
	generated_at: DateTime<Utc>,
) -> Result<Preset> {
	let tokens = TokenSet::load(tokens_dir)?;
	let preset = compile(&tokens);
	let source = render(&preset, generated_at, format)?;
	write_atomic(output, &source)?;
	info!(path = %output.display(), %format, bytes = source.len(), "wrote preset");
	Ok(preset)
}

/// Whether a committed artifact matches the current tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
	/// The embedded document equals a fresh compile.
	UpToDate,
	/// The embedded document differs.
	Stale,
	/// There is no artifact at the path.
	Missing,
}

/// Compares the document embedded at `path` with `preset`, ignoring the timestamp.
///
/// Comparison is structural: key order and formatting do not matter.
pub fn check(path: &Path, preset: &Preset) -> Result<Freshness> {
	let source = match std::fs::read_to_string(path) {
		Ok(source) => source,
		Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
			warn!(path = %path.display(), "preset artifact is missing");
			return Ok(Freshness::Missing);
		}
		Err(error) => {
			return Err(PresetError::Read {
				path: path.to_path_buf(),
				error,
			});
		}
	};

	let existing = extract_preset(&source)?;
	if existing == serde_json::to_value(preset)? {
		Ok(Freshness::UpToDate)
	} else {
		warn!(path = %path.display(), "preset artifact is out of date");
		Ok(Freshness::Stale)
	}
}
