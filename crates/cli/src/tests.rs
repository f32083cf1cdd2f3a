use std::fs;
use std::path::{Path, PathBuf};

use dv_preset::ModuleFormat;
use dv_tokens::Document;
use pretty_assertions::assert_eq;

use super::*;

const TOKENS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../design-tokens");

fn now() -> DateTime<Utc> {
	DateTime::parse_from_rfc3339("2026-10-18T00:00:00Z")
		.unwrap()
		.with_timezone(&Utc)
}

fn settings(root: &Path, tokens: PathBuf) -> Settings {
	Settings {
		tokens,
		output: root.join("tailwind-preset.js"),
		format: ModuleFormat::Esm,
	}
}

#[test]
fn generate_prints_confirmation() {
	let root = tempfile::tempdir().unwrap();
	let settings = settings(root.path(), TOKENS_DIR.into());

	let message = generate(&settings, now()).unwrap();

	assert_eq!(message, "Generated tailwind-preset.js from design tokens");
	assert!(settings.output.is_file());
}

#[test]
fn check_passes_after_generate() {
	let root = tempfile::tempdir().unwrap();
	let settings = settings(root.path(), TOKENS_DIR.into());
	generate(&settings, now()).unwrap();

	assert_eq!(check(&settings).unwrap(), "tailwind-preset.js is up to date");
}

#[test]
fn check_fails_without_artifact() {
	let root = tempfile::tempdir().unwrap();
	let settings = settings(root.path(), TOKENS_DIR.into());

	let err = check(&settings).unwrap_err();
	assert!(err.to_string().contains("does not exist"));
	assert!(!settings.output.exists());
}

#[test]
fn check_fails_on_stale_artifact() {
	let root = tempfile::tempdir().unwrap();
	let settings = settings(root.path(), TOKENS_DIR.into());
	let stale = "const preset = { \"theme\": { \"extend\": {} } };\n\nexport default preset;\n";
	fs::write(&settings.output, stale).unwrap();

	let err = check(&settings).unwrap_err();

	assert!(err.to_string().contains("tailwind-preset.js is out of date"));
	assert_eq!(fs::read_to_string(&settings.output).unwrap(), stale);
}

#[test]
fn malformed_token_fails_with_context() {
	let root = tempfile::tempdir().unwrap();
	let tokens = root.path().join("tokens");
	fs::create_dir(&tokens).unwrap();
	for document in Document::ALL {
		fs::copy(
			Path::new(TOKENS_DIR).join(document.file_name()),
			tokens.join(document.file_name()),
		)
		.unwrap();
	}
	fs::write(
		tokens.join("borders.json"),
		r#"{ "border": { "radius": { "none": { "$type": "dimension" } } } }"#,
	)
	.unwrap();
	let settings = settings(root.path(), tokens);

	let err = generate(&settings, now()).unwrap_err();

	let chain = format!("{err:#}");
	assert!(chain.starts_with("failed to generate"));
	assert!(chain.contains("border.radius.none"));
	assert!(!settings.output.exists());
}
