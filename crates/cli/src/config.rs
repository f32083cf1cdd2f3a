//! Optional `dv-preset.toml` and resolution of the effective settings.
//!
//! ```toml
//! tokens = "design-tokens"
//! output = "tailwind-preset.js"
//! format = "esm"
//! ```
//!
//! Command-line flags win over the config file, which wins over the defaults.
//! Relative paths in the file are taken relative to the file itself.

use std::path::{Path, PathBuf};

use anyhow::Context;
use dv_preset::ModuleFormat;
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;

pub const CONFIG_FILE: &str = "dv-preset.toml";
pub const DEFAULT_TOKENS_DIR: &str = "design-tokens";
pub const DEFAULT_OUTPUT: &str = "tailwind-preset.js";

/// Contents of a `dv-preset.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub tokens: Option<PathBuf>,
	pub output: Option<PathBuf>,
	pub format: Option<ModuleFormat>,
}

impl Config {
	pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}

	/// Reads `path`, resolving relative paths against its directory.
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read config {}", path.display()))?;
		let config = Self::parse(&content)
			.with_context(|| format!("invalid config {}", path.display()))?;
		let base = path.parent().unwrap_or(Path::new(""));
		debug!(path = %path.display(), "loaded config");
		Ok(Self {
			tokens: config.tokens.map(|p| base.join(p)),
			output: config.output.map(|p| base.join(p)),
			format: config.format,
		})
	}

	/// Loads `explicit` if given, else `./dv-preset.toml` if it exists.
	pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
		Self::discover_in(Path::new(""), explicit)
	}

	/// Like [`Config::discover`], looking for the implicit file in `dir`.
	pub fn discover_in(dir: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		let implicit = dir.join(CONFIG_FILE);
		if implicit.is_file() {
			Self::load(&implicit)
		} else {
			debug!(dir = %dir.display(), "no config file, using defaults");
			Ok(Self::default())
		}
	}
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	pub tokens: PathBuf,
	pub output: PathBuf,
	pub format: ModuleFormat,
}

impl Settings {
	pub fn resolve(cli: &Cli, config: Config) -> Self {
		Self {
			tokens: cli
				.tokens
				.clone()
				.or(config.tokens)
				.unwrap_or_else(|| PathBuf::from(DEFAULT_TOKENS_DIR)),
			output: cli
				.output
				.clone()
				.or(config.output)
				.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
			format: cli.format.or(config.format).unwrap_or_default(),
		}
	}

	/// Output file name for messages.
	pub fn output_name(&self) -> String {
		self.output
			.file_name()
			.unwrap_or(self.output.as_os_str())
			.to_string_lossy()
			.into_owned()
	}
}

#[cfg(test)]
mod tests;
