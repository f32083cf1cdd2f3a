use std::path::PathBuf;

use clap::Parser;
use dv_preset::ModuleFormat;

#[derive(Parser, Debug)]
#[command(name = "dv-preset")]
#[command(about = "Generate the Tailwind CSS preset from design tokens")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Directory containing the token documents [default: design-tokens]
	#[arg(long, value_name = "DIR")]
	pub tokens: Option<PathBuf>,

	/// Preset file to write [default: tailwind-preset.js]
	#[arg(long, short = 'o', value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Module format of the preset: esm, commonjs (cjs) or dual [default: esm]
	#[arg(long, value_name = "FORMAT")]
	pub format: Option<ModuleFormat>,

	/// Config file (defaults to ./dv-preset.toml when present)
	#[arg(long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Verify the existing preset matches the tokens instead of writing it
	#[arg(long)]
	pub check: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}
