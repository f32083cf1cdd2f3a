use chrono::{DateTime, Utc};
use dv_tokens::TokenSet;
use indexmap::IndexMap;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use super::*;
use crate::compile::compile;
use crate::extension::{ThemeExtension, theme_map};

const TOKENS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../design-tokens");

fn at(timestamp: &str) -> DateTime<Utc> {
	DateTime::parse_from_rfc3339(timestamp).unwrap().with_timezone(&Utc)
}

fn minimal_preset() -> Preset {
	Preset::new(ThemeExtension {
		font_family: IndexMap::new(),
		colors: IndexMap::new(),
		border_radius: IndexMap::new(),
		spacing: theme_map([("dv-px", "1px")]),
		font_size: IndexMap::new(),
		font_weight: IndexMap::new(),
		keyframes: IndexMap::new(),
		animation: IndexMap::new(),
		transition_duration: IndexMap::new(),
		transition_timing_function: IndexMap::new(),
		box_shadow: IndexMap::new(),
		background_image: IndexMap::new(),
		background_size: IndexMap::new(),
	})
}

fn full_preset() -> Preset {
	compile(&TokenSet::load(TOKENS_DIR).unwrap())
}

#[test]
fn esm_module_layout() {
	let source = render(&minimal_preset(), at("2026-01-02T03:04:05.678Z"), ModuleFormat::Esm).unwrap();
	assert_snapshot!(source, @r#"
	/**
	 * Dragvertising Design System - Tailwind CSS Preset
	 *
	 * This file is auto-generated from design tokens.
	 * DO NOT EDIT MANUALLY - run `dv-preset` in the design-system repo to regenerate.
	 *
	 * Generated: 2026-01-02T03:04:05.678Z
	 */

	const preset = {
	  "theme": {
	    "extend": {
	      "fontFamily": {},
	      "colors": {},
	      "borderRadius": {},
	      "spacing": {
	        "dv-px": "1px"
	      },
	      "fontSize": {},
	      "fontWeight": {},
	      "keyframes": {},
	      "animation": {},
	      "transitionDuration": {},
	      "transitionTimingFunction": {},
	      "boxShadow": {},
	      "backgroundImage": {},
	      "backgroundSize": {}
	    }
	  }
	};

	export default preset;
	"#);
}

#[test]
fn dual_format_keeps_both_export_paths() {
	let source = render(&minimal_preset(), at("2026-01-02T03:04:05Z"), ModuleFormat::Dual).unwrap();
	assert!(source.contains("if (typeof module !== 'undefined' && module.exports) {\n  module.exports = preset;\n}"));
	assert!(source.contains("exports.default = preset;"));
	assert!(source.ends_with("export default preset;\n"));
}

#[test]
fn commonjs_format_has_no_esm_export() {
	let source = render(&minimal_preset(), at("2026-01-02T03:04:05Z"), ModuleFormat::CommonJs).unwrap();
	assert!(source.ends_with("};\n\nmodule.exports = preset;\n"));
	assert!(!source.contains("export default"));
}

#[test]
fn timestamp_is_the_only_difference_between_runs() {
	let preset = full_preset();
	let first = render(&preset, at("2026-01-02T03:04:05.000Z"), ModuleFormat::Esm).unwrap();
	let second = render(&preset, at("2027-06-30T23:59:59.999Z"), ModuleFormat::Esm).unwrap();

	let differing: Vec<_> = first
		.lines()
		.zip(second.lines())
		.filter(|(a, b)| a != b)
		.collect();
	assert_eq!(first.lines().count(), second.lines().count());
	assert_eq!(
		differing,
		[(
			" * Generated: 2026-01-02T03:04:05.000Z",
			" * Generated: 2027-06-30T23:59:59.999Z"
		)]
	);
}

#[test]
fn extract_recovers_embedded_document() {
	let preset = full_preset();
	for format in [ModuleFormat::Esm, ModuleFormat::CommonJs, ModuleFormat::Dual] {
		let source = render(&preset, at("2026-01-02T03:04:05Z"), format).unwrap();
		let embedded = extract_preset(&source).unwrap();
		assert_eq!(embedded, serde_json::to_value(&preset).unwrap(), "{format}");
	}
}

#[test]
fn extract_rejects_foreign_source() {
	let err = extract_preset("module.exports = { theme: {} };").unwrap_err();
	assert!(matches!(err, PresetError::Extract(_)));

	let err = extract_preset("const preset = { theme: ").unwrap_err();
	assert!(matches!(err, PresetError::Extract(_)));
}

#[test]
fn module_format_parsing() {
	assert_eq!("esm".parse::<ModuleFormat>(), Ok(ModuleFormat::Esm));
	assert_eq!("CJS".parse::<ModuleFormat>(), Ok(ModuleFormat::CommonJs));
	assert_eq!("commonjs".parse::<ModuleFormat>(), Ok(ModuleFormat::CommonJs));
	assert_eq!("dual".parse::<ModuleFormat>(), Ok(ModuleFormat::Dual));
	assert!("umd".parse::<ModuleFormat>().is_err());
	assert_eq!(ModuleFormat::default(), ModuleFormat::Esm);

	let format: ModuleFormat = serde_json::from_str("\"cjs\"").unwrap();
	assert_eq!(format, ModuleFormat::CommonJs);
	let upper: ModuleFormat = serde_json::from_str("\"CommonJS\"").unwrap();
	assert_eq!(upper, ModuleFormat::CommonJs);
	let err = serde_json::from_str::<ModuleFormat>("\"umd\"").unwrap_err();
	assert!(err.to_string().contains("unknown module format 'umd'"));
	assert_eq!(format.to_string().parse::<ModuleFormat>(), Ok(format));
}
