//! Error types for loading and validating token documents.

use std::path::PathBuf;

use thiserror::Error;

use crate::load::Document;
use crate::value::ValueKind;

/// Errors that can occur while reading or validating token documents.
#[derive(Debug, Error)]
pub enum TokenError {
	/// A token document could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A token document is not valid JSON.
	#[error("invalid JSON in {path}: {error}")]
	Json {
		/// Path to the offending file.
		path: PathBuf,
		/// The underlying parse error.
		error: serde_json::Error,
	},

	/// A required field is absent.
	#[error("missing required field `{path}` in {document}")]
	MissingField {
		/// Document the field was expected in.
		document: Document,
		/// Dotted path of the missing field.
		path: String,
	},

	/// A field is present but has the wrong shape.
	#[error("malformed token `{path}` in {document}: expected {expected}, found {found}")]
	Malformed {
		/// Document containing the field.
		document: Document,
		/// Dotted path of the field.
		path: String,
		/// Human-readable description of the accepted shapes.
		expected: &'static str,
		/// What was found instead.
		found: ValueKind,
	},
}

impl TokenError {
	/// Dotted path of the offending field, for schema errors.
	pub fn path(&self) -> Option<&str> {
		match self {
			Self::MissingField { path, .. } | Self::Malformed { path, .. } => Some(path),
			Self::Io { .. } | Self::Json { .. } => None,
		}
	}
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
