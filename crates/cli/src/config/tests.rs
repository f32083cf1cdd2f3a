use clap::Parser;
use pretty_assertions::assert_eq;

use super::*;

fn cli(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("dv-preset").chain(args.iter().copied())).unwrap()
}

#[test]
fn parse_full_config() {
	let config = Config::parse(
		r#"
		tokens = "tokens"
		output = "dist/preset.js"
		format = "dual"
		"#,
	)
	.unwrap();
	assert_eq!(
		config,
		Config {
			tokens: Some("tokens".into()),
			output: Some("dist/preset.js".into()),
			format: Some(ModuleFormat::Dual),
		}
	);
}

#[test]
fn parse_accepts_cjs_alias() {
	let config = Config::parse("format = \"cjs\"").unwrap();
	assert_eq!(config.format, Some(ModuleFormat::CommonJs));
}

#[test]
fn parse_format_ignores_case() {
	let config = Config::parse("format = \"CJS\"").unwrap();
	assert_eq!(config.format, Some(ModuleFormat::CommonJs));
}

#[test]
fn parse_rejects_unknown_keys() {
	let err = Config::parse("prefix = \"tw-\"").unwrap_err();
	assert!(err.to_string().contains("prefix"));
}

#[test]
fn defaults_without_flags_or_config() {
	let settings = Settings::resolve(&cli(&[]), Config::default());
	assert_eq!(
		settings,
		Settings {
			tokens: DEFAULT_TOKENS_DIR.into(),
			output: DEFAULT_OUTPUT.into(),
			format: ModuleFormat::Esm,
		}
	);
	assert_eq!(settings.output_name(), "tailwind-preset.js");
}

#[test]
fn flags_override_config() {
	let config = Config {
		tokens: Some("from-config".into()),
		output: Some("config.js".into()),
		format: Some(ModuleFormat::Dual),
	};
	let settings = Settings::resolve(&cli(&["--output", "flag.js"]), config);
	assert_eq!(settings.tokens, PathBuf::from("from-config"));
	assert_eq!(settings.output, PathBuf::from("flag.js"));
	assert_eq!(settings.format, ModuleFormat::Dual);
}

#[test]
fn load_resolves_paths_relative_to_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(CONFIG_FILE);
	std::fs::write(&path, "tokens = \"tokens\"\noutput = \"out/preset.js\"\n").unwrap();

	let config = Config::load(&path).unwrap();
	assert_eq!(config.tokens, Some(dir.path().join("tokens")));
	assert_eq!(config.output, Some(dir.path().join("out/preset.js")));
	assert_eq!(config.format, None);
}

#[test]
fn explicit_missing_config_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Config::discover(Some(&dir.path().join("nope.toml"))).unwrap_err();
	assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn discover_loads_implicit_file() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join(CONFIG_FILE), "output = \"dist/preset.js\"\n").unwrap();

	let config = Config::discover_in(dir.path(), None).unwrap();
	assert_eq!(config.output, Some(dir.path().join("dist/preset.js")));
	assert_eq!(config.tokens, None);
}

#[test]
fn discover_without_implicit_file_uses_defaults() {
	let dir = tempfile::tempdir().unwrap();

	let config = Config::discover_in(dir.path(), None).unwrap();
	assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_wins_over_implicit_file() {
	let dir = tempfile::tempdir().unwrap();
	std::fs::write(dir.path().join(CONFIG_FILE), "format = \"dual\"\n").unwrap();
	let explicit = dir.path().join("other.toml");
	std::fs::write(&explicit, "format = \"esm\"\n").unwrap();

	let config = Config::discover_in(dir.path(), Some(&explicit)).unwrap();
	assert_eq!(config.format, Some(ModuleFormat::Esm));
}
