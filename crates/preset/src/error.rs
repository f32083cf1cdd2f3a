//! Error types for preset generation.

use std::path::PathBuf;

use dv_tokens::TokenError;
use thiserror::Error;

/// Errors that can occur while compiling, rendering or writing a preset.
#[derive(Debug, Error)]
pub enum PresetError {
	/// Token documents were missing or malformed.
	#[error(transparent)]
	Tokens(#[from] TokenError),

	/// The preset could not be serialized to JSON.
	#[error("failed to serialize preset: {0}")]
	Serialize(#[from] serde_json::Error),

	/// An existing artifact could not be read.
	#[error("I/O error reading {path}: {error}")]
	Read {
		/// Path to the artifact.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The artifact could not be persisted.
	#[error("failed to write {path}: {error}")]
	Write {
		/// Destination path.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An existing artifact does not embed a preset document.
	#[error("artifact does not embed a preset: {0}")]
	Extract(String),
}

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;
