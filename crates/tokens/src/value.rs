//! Token value unwrapping.
//!
//! A token leaf is either a bare literal (`"4px"`, `400`) or an object
//! wrapping the literal in a `$value` field alongside metadata such as
//! `$type` and `$description`. [`unwrap`] resolves both forms in one step.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// Field carrying the literal value of a wrapped token.
pub const VALUE_KEY: &str = "$value";

/// Resolves a token leaf to its underlying value.
///
/// Objects must carry [`VALUE_KEY`]; any other value is returned as is. An
/// object without `$value` yields [`ValueKind::Object`] so callers can report
/// what they found.
pub fn unwrap(value: &Value) -> Result<&Value, ValueKind> {
	match value {
		Value::Object(map) => map.get(VALUE_KEY).ok_or(ValueKind::Object),
		other => Ok(other),
	}
}

/// A resolved string or numeric token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
	String(String),
	Number(Number),
}

impl Scalar {
	/// Unwraps `value` and requires a string or number.
	pub fn from_value(value: &Value) -> Result<Self, ValueKind> {
		match unwrap(value)? {
			Value::String(s) => Ok(Self::String(s.clone())),
			Value::Number(n) => Ok(Self::Number(n.clone())),
			other => Err(ValueKind::of(other)),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(s) => Some(s),
			Self::Number(_) => None,
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String(s) => f.write_str(s),
			Self::Number(n) => write!(f, "{n}"),
		}
	}
}

impl From<&str> for Scalar {
	fn from(s: &str) -> Self {
		Self::String(s.to_string())
	}
}

impl From<u64> for Scalar {
	fn from(n: u64) -> Self {
		Self::Number(n.into())
	}
}

/// Shape of a JSON value, used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	Null,
	Bool,
	Number,
	String,
	Array,
	Object,
}

impl ValueKind {
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(_) => Self::Bool,
			Value::Number(_) => Self::Number,
			Value::String(_) => Self::String,
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Null => "null",
			Self::Bool => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		})
	}
}
