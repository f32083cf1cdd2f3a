//! Path-tracking cursor over a parsed token document.
//!
//! Every lookup extends the dotted path so failures name the exact field,
//! e.g. `shadows.elevation.sm.$value.color`.

use serde_json::{Map, Value};

use crate::error::{Result, TokenError};
use crate::load::Document;
use crate::value::{self, Scalar, VALUE_KEY, ValueKind};

/// A value inside a token document, together with where it was found.
#[derive(Debug, Clone)]
pub struct Node<'a> {
	document: Document,
	path: String,
	value: &'a Value,
}

impl<'a> Node<'a> {
	/// Enters `root` at its document's root key.
	pub fn root(document: Document, root: &'a Value) -> Result<Self> {
		Node {
			document,
			path: String::new(),
			value: root,
		}
		.get(document.root_key())
	}

	pub fn document(&self) -> Document {
		self.document
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn value(&self) -> &'a Value {
		self.value
	}

	/// Descends into the mapping entry `key`.
	pub fn get(&self, key: &str) -> Result<Node<'a>> {
		let map = self.mapping()?;
		let path = self.child_path(key);
		match map.get(key) {
			Some(value) => Ok(Node {
				document: self.document,
				path,
				value,
			}),
			None => Err(TokenError::MissingField {
				document: self.document,
				path,
			}),
		}
	}

	/// Like [`Node::get`], but an absent key is `None` rather than an error.
	pub fn get_optional(&self, key: &str) -> Result<Option<Node<'a>>> {
		let map = self.mapping()?;
		Ok(map.get(key).map(|value| Node {
			document: self.document,
			path: self.child_path(key),
			value,
		}))
	}

	/// Descends into `$value` when this is a wrapped token, else stays put.
	pub fn unwrapped(&self) -> Result<Node<'a>> {
		match self.value {
			Value::Object(map) => match map.get(VALUE_KEY) {
				Some(value) => Ok(Node {
					document: self.document,
					path: self.child_path(VALUE_KEY),
					value,
				}),
				None => Err(self.malformed("a literal or an object with `$value`", ValueKind::Object)),
			},
			_ => Ok(self.clone()),
		}
	}

	/// Resolves this token to a string or number.
	pub fn scalar(&self) -> Result<Scalar> {
		Scalar::from_value(self.value).map_err(|found| self.malformed("a string or number", found))
	}

	/// Shorthand for `self.get(key)?.scalar()`.
	pub fn scalar_at(&self, key: &str) -> Result<Scalar> {
		self.get(key)?.scalar()
	}

	/// Resolves this token to a list of strings.
	pub fn strings(&self) -> Result<Vec<String>> {
		let value = value::unwrap(self.value).map_err(|found| self.malformed("a string array", found))?;
		let Value::Array(items) = value else {
			return Err(self.malformed("a string array", ValueKind::of(value)));
		};
		items
			.iter()
			.enumerate()
			.map(|(idx, item)| match item {
				Value::String(s) => Ok(s.clone()),
				other => Err(TokenError::Malformed {
					document: self.document,
					path: self.child_path(&idx.to_string()),
					expected: "a string",
					found: ValueKind::of(other),
				}),
			})
			.collect()
	}

	/// Resolves this token to a JSON object carried through verbatim.
	pub fn object(&self) -> Result<Map<String, Value>> {
		let inner = self.unwrapped()?;
		match inner.value {
			Value::Object(map) => Ok(map.clone()),
			other => Err(inner.malformed("an object", ValueKind::of(other))),
		}
	}

	/// Builds a [`TokenError::Malformed`] located at this node.
	pub fn malformed(&self, expected: &'static str, found: ValueKind) -> TokenError {
		TokenError::Malformed {
			document: self.document,
			path: self.path.clone(),
			expected,
			found,
		}
	}

	fn mapping(&self) -> Result<&'a Map<String, Value>> {
		match self.value {
			Value::Object(map) => Ok(map),
			other => Err(self.malformed("a mapping", ValueKind::of(other))),
		}
	}

	fn child_path(&self, key: &str) -> String {
		if self.path.is_empty() {
			key.to_string()
		} else {
			format!("{}.{key}", self.path)
		}
	}
}
