//! `dv-preset`: compiles `design-tokens/*.json` into `tailwind-preset.js`.
//!
//! Run without arguments from the design-system repository root. Any failure
//! (missing token file, malformed token, unwritable output) exits non-zero.

mod cli;
mod config;
#[cfg(test)]
mod tests;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::Cli;
use config::{Config, Settings};
use dv_preset::Freshness;
use dv_tokens::TokenSet;
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let config = Config::discover(cli.config.as_deref())?;
	let settings = Settings::resolve(&cli, config);
	debug!(?settings, "resolved settings");

	let message = if cli.check {
		check(&settings)?
	} else {
		generate(&settings, Utc::now())?
	};
	println!("{message}");
	Ok(())
}

/// Writes the preset and returns the confirmation message.
fn generate(settings: &Settings, generated_at: DateTime<Utc>) -> anyhow::Result<String> {
	dv_preset::generate(&settings.tokens, &settings.output, settings.format, generated_at)
		.with_context(|| format!("failed to generate {}", settings.output.display()))?;
	Ok(format!("Generated {} from design tokens", settings.output_name()))
}

/// Fails unless the existing preset matches what the tokens compile to.
fn check(settings: &Settings) -> anyhow::Result<String> {
	let tokens = TokenSet::load(&settings.tokens)
		.with_context(|| format!("failed to load tokens from {}", settings.tokens.display()))?;
	let preset = dv_preset::compile(&tokens);
	let name = settings.output_name();
	match dv_preset::check(&settings.output, &preset)? {
		Freshness::UpToDate => Ok(format!("{name} is up to date")),
		Freshness::Stale => bail!("{name} is out of date; run dv-preset to regenerate it"),
		Freshness::Missing => bail!("{name} does not exist; run dv-preset to generate it"),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("DV_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
