//! Renders a [`Preset`] as a JavaScript module.
//!
//! The generated file looks like:
//!
//! ```text
//! /**
//!  * Dragvertising Design System - Tailwind CSS Preset
//!  * ...
//!  * Generated: 2026-01-01T00:00:00.000Z
//!  */
//!
//! const preset = { "theme": { "extend": { ... } } };
//!
//! export default preset;
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PresetError, Result};
use crate::extension::Preset;

const HEADER: &str = concat!(
	"/**\n",
	" * Dragvertising Design System - Tailwind CSS Preset\n",
	" *\n",
	" * This file is auto-generated from design tokens.\n",
	" * DO NOT EDIT MANUALLY - run `dv-preset` in the design-system repo to regenerate.\n",
	" *\n",
);

/// Marker preceding the embedded preset document.
const DECLARATION: &str = "const preset = ";

/// How the generated module exports the preset.
///
/// Parsed case-insensitively, from flags and config alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ModuleFormat {
	/// `export default preset;`
	#[default]
	Esm,
	/// `module.exports = preset;`
	CommonJs,
	/// Legacy shim exporting through both module systems.
	Dual,
}

impl ModuleFormat {
	fn export_tail(self) -> &'static str {
		match self {
			Self::Esm => "export default preset;\n",
			Self::CommonJs => "module.exports = preset;\n",
			Self::Dual => concat!(
				"// Support both CommonJS and ES modules\n",
				"if (typeof module !== 'undefined' && module.exports) {\n",
				"  module.exports = preset;\n",
				"}\n",
				"if (typeof exports !== 'undefined') {\n",
				"  exports.default = preset;\n",
				"}\n",
				"export default preset;\n",
			),
		}
	}
}

impl fmt::Display for ModuleFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Esm => "esm",
			Self::CommonJs => "commonjs",
			Self::Dual => "dual",
		})
	}
}

impl FromStr for ModuleFormat {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"esm" => Ok(Self::Esm),
			"commonjs" | "cjs" => Ok(Self::CommonJs),
			"dual" => Ok(Self::Dual),
			other => Err(format!(
				"unknown module format '{other}' (expected esm, commonjs or dual)"
			)),
		}
	}
}

impl TryFrom<String> for ModuleFormat {
	type Error = String;

	fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
		s.parse()
	}
}

/// Renders `preset` as module source stamped with `generated_at`.
pub fn render(preset: &Preset, generated_at: DateTime<Utc>, format: ModuleFormat) -> Result<String> {
	let document = serde_json::to_string_pretty(preset)?;
	let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);
	Ok(format!(
		"{HEADER} * Generated: {timestamp}\n */\n\n{DECLARATION}{document};\n\n{tail}",
		tail = format.export_tail(),
	))
}

/// Recovers the preset document embedded in previously rendered source.
pub fn extract_preset(source: &str) -> Result<Value> {
	let start = source
		.find(DECLARATION)
		.ok_or_else(|| PresetError::Extract(format!("no `{}` declaration", DECLARATION.trim_end())))?;
	let rest = &source[start + DECLARATION.len()..];
	serde_json::Deserializer::from_str(rest)
		.into_iter::<Value>()
		.next()
		.ok_or_else(|| PresetError::Extract("declaration has no value".into()))?
		.map_err(|e| PresetError::Extract(e.to_string()))
}

#[cfg(test)]
mod tests;
