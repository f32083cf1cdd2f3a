//! Locating and parsing the six token documents.

use std::fmt;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TokenError};
use crate::schema::TokenSet;

/// One of the six token documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
	Colors,
	Typography,
	Spacing,
	Borders,
	Shadows,
	Animations,
}

impl Document {
	/// All documents, in load order.
	pub const ALL: [Document; 6] = [
		Document::Colors,
		Document::Typography,
		Document::Spacing,
		Document::Borders,
		Document::Shadows,
		Document::Animations,
	];

	/// File name inside the tokens directory.
	pub const fn file_name(self) -> &'static str {
		match self {
			Self::Colors => "colors.json",
			Self::Typography => "typography.json",
			Self::Spacing => "spacing.json",
			Self::Borders => "borders.json",
			Self::Shadows => "shadows.json",
			Self::Animations => "animations.json",
		}
	}

	/// Top-level key every path in this document starts with.
	pub const fn root_key(self) -> &'static str {
		match self {
			Self::Colors => "colors",
			Self::Typography => "typography",
			Self::Spacing => "spacing",
			Self::Borders => "border",
			Self::Shadows => "shadows",
			Self::Animations => "animation",
		}
	}
}

impl fmt::Display for Document {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.file_name())
	}
}

/// The six token documents in parsed, unvalidated form.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenDocuments {
	pub colors: Value,
	pub typography: Value,
	pub spacing: Value,
	pub borders: Value,
	pub shadows: Value,
	pub animations: Value,
}

impl TokenDocuments {
	/// Reads and parses every document from `dir`.
	///
	/// Fails on the first file that is missing or not valid JSON.
	pub fn read(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();
		Ok(Self {
			colors: read_document(dir, Document::Colors)?,
			typography: read_document(dir, Document::Typography)?,
			spacing: read_document(dir, Document::Spacing)?,
			borders: read_document(dir, Document::Borders)?,
			shadows: read_document(dir, Document::Shadows)?,
			animations: read_document(dir, Document::Animations)?,
		})
	}

	pub fn get(&self, document: Document) -> &Value {
		match document {
			Document::Colors => &self.colors,
			Document::Typography => &self.typography,
			Document::Spacing => &self.spacing,
			Document::Borders => &self.borders,
			Document::Shadows => &self.shadows,
			Document::Animations => &self.animations,
		}
	}

	pub fn get_mut(&mut self, document: Document) -> &mut Value {
		match document {
			Document::Colors => &mut self.colors,
			Document::Typography => &mut self.typography,
			Document::Spacing => &mut self.spacing,
			Document::Borders => &mut self.borders,
			Document::Shadows => &mut self.shadows,
			Document::Animations => &mut self.animations,
		}
	}
}

impl TokenSet {
	/// Reads all documents from `dir` and validates them.
	pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
		Self::from_documents(&TokenDocuments::read(dir)?)
	}
}

fn read_document(dir: &Path, document: Document) -> Result<Value> {
	let path = dir.join(document.file_name());
	debug!(path = %path.display(), "reading token document");
	let content = std::fs::read_to_string(&path).map_err(|error| TokenError::Io {
		path: path.clone(),
		error,
	})?;
	serde_json::from_str(&content).map_err(|error| TokenError::Json { path, error })
}
