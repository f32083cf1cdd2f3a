//! Token compiler: [`TokenSet`] → [`Preset`].
//!
//! A single mapping pass. Every lookup was validated when the set was built,
//! so compilation itself cannot fail.

mod fixed;

use dv_tokens::{
	AnimationTokens, BorderTokens, ColorTokens, Scalar, ShadowTokens, SpacingTokens, TokenDocuments,
	TokenSet, TypographyTokens,
};
use tracing::debug;

use crate::error::Result;
use crate::extension::{Preset, ThemeExtension, ThemeMap, ThemeValue, theme_map};

/// Prefix for every generated key, keeping them clear of Tailwind's defaults.
pub const PREFIX: &str = "dv-";

fn dv(name: &str) -> String {
	format!("{PREFIX}{name}")
}

/// Compiles a validated token set into a preset.
pub fn compile(tokens: &TokenSet) -> Preset {
	let extend = ThemeExtension {
		font_family: font_family(&tokens.typography),
		colors: colors(&tokens.colors),
		border_radius: border_radius(&tokens.borders),
		spacing: spacing(&tokens.spacing),
		font_size: prefixed(tokens.typography.font_size.iter()),
		font_weight: font_weight(&tokens.typography),
		keyframes: keyframes(&tokens.animations),
		animation: animation(&tokens.animations),
		transition_duration: transition_duration(&tokens.animations),
		transition_timing_function: theme_map(fixed::TIMING_FUNCTIONS.iter().copied()),
		box_shadow: box_shadow(&tokens.shadows),
		background_image: background_image(&tokens.colors),
		background_size: theme_map(fixed::BACKGROUND_SIZES.iter().copied()),
	};
	debug!(
		colors = extend.colors.len(),
		spacing = extend.spacing.len(),
		shadows = extend.box_shadow.len(),
		"compiled theme extension"
	);
	Preset::new(extend)
}

/// Validates parsed documents and compiles them.
pub fn compile_documents(docs: &TokenDocuments) -> Result<Preset> {
	Ok(compile(&TokenSet::from_documents(docs)?))
}

fn prefixed<'a>(entries: impl Iterator<Item = (&'static str, &'a Scalar)>) -> ThemeMap {
	entries.map(|(name, value)| (dv(name), value.into())).collect()
}

fn font_family(t: &TypographyTokens) -> ThemeMap {
	theme_map([
		("sans", &t.sans),
		("serif", &t.serif),
		("display", &t.display),
		("lordrina", &t.londrina),
	])
}

fn colors(c: &ColorTokens) -> ThemeMap {
	let mut colors = theme_map([
		("pink", ThemeValue::map([("500", &c.pink)])),
		(
			"golden",
			ThemeValue::map([
				("400", ThemeValue::from(fixed::GOLDEN_400)),
				("500", (&c.golden).into()),
				("600", fixed::GOLDEN_600.into()),
				("700", fixed::GOLDEN_700.into()),
				("DEFAULT", (&c.golden).into()),
			]),
		),
		(
			"warmOrange",
			ThemeValue::map([
				("400", ThemeValue::from(fixed::WARM_ORANGE_400)),
				("500", (&c.warm_orange).into()),
				("600", fixed::WARM_ORANGE_600.into()),
				("DEFAULT", (&c.warm_orange).into()),
			]),
		),
		("dv-purple", ThemeValue::map(fixed::DV_PURPLE.iter().copied())),
		("dv-pink", ThemeValue::map(fixed::DV_PINK.iter().copied())),
		("dv-orange", ThemeValue::map(fixed::DV_ORANGE.iter().copied())),
	]);

	colors.extend(theme_map(fixed::SEMANTIC_COLORS.iter().copied()));
	for &name in fixed::SEMANTIC_PAIRS {
		colors.insert(
			name.to_string(),
			ThemeValue::map([
				("DEFAULT", format!("hsl(var(--{name}))")),
				("foreground", format!("hsl(var(--{name}-foreground))")),
			]),
		);
	}
	colors.insert("sidebar".into(), ThemeValue::map(fixed::SIDEBAR.iter().copied()));
	colors
}

fn border_radius(b: &BorderTokens) -> ThemeMap {
	let mut radius = theme_map(fixed::RADIUS_ALIASES.iter().copied());
	radius.extend(prefixed(b.radius.iter()));
	radius
}

fn spacing(s: &SpacingTokens) -> ThemeMap {
	prefixed(s.steps.iter())
}

fn font_weight(t: &TypographyTokens) -> ThemeMap {
	theme_map([
		(dv("regular"), &t.regular),
		(dv("semibold"), &t.semibold),
		(dv("bold"), &t.bold),
	])
}

fn keyframes(a: &AnimationTokens) -> ThemeMap {
	let mut keyframes = theme_map([
		(
			"accordion-down",
			ThemeValue::map([
				("from", ThemeValue::map([("height", "0")])),
				("to", ThemeValue::map([("height", fixed::ACCORDION_CONTENT_HEIGHT)])),
			]),
		),
		(
			"accordion-up",
			ThemeValue::map([
				("from", ThemeValue::map([("height", fixed::ACCORDION_CONTENT_HEIGHT)])),
				("to", ThemeValue::map([("height", "0")])),
			]),
		),
	]);
	keyframes.extend(a.keyframes.iter().map(|(name, frames)| (name.to_string(), frames.into())));
	keyframes
}

/// Named durations, smallest first, paired with their token.
fn durations(a: &AnimationTokens) -> [(&'static str, &Scalar); 4] {
	[
		("fast", &a.fast),
		("base", &a.normal),
		("slow", &a.moderate),
		("slower", &a.slow),
	]
}

fn animation(a: &AnimationTokens) -> ThemeMap {
	let mut animation = theme_map(fixed::ACCORDION_ANIMATIONS.iter().copied());
	animation.extend(a.presets.iter().map(|(name, preset)| (name.to_string(), preset.into())));
	animation.extend(
		durations(a)
			.into_iter()
			.map(|(name, duration)| (dv(name), format!("all {duration} ease-in-out").into())),
	);
	animation
}

fn transition_duration(a: &AnimationTokens) -> ThemeMap {
	prefixed(durations(a).into_iter())
}

fn box_shadow(s: &ShadowTokens) -> ThemeMap {
	let mut shadows = ThemeMap::new();
	for (level, shadow) in s.elevation.iter() {
		shadows.insert(dv(level), shadow.to_string().into());
		if level == "sm" {
			shadows.insert(dv("base"), fixed::SHADOW_BASE.into());
		}
	}
	let glows = [
		("glow-primary-light", &s.glow_primary),
		("glow-primary-dark", &s.glow_primary_strong),
		("glow-golden-light", &s.glow_golden),
		("glow-golden-dark", &s.glow_golden_strong),
	];
	shadows.extend(glows.into_iter().map(|(name, glow)| (dv(name), glow.to_string().into())));
	shadows
}

fn background_image(c: &ColorTokens) -> ThemeMap {
	let mut images = theme_map(fixed::GRADIENT_ALIASES.iter().copied());
	images.extend(theme_map([
		("gradient-dragvertising", &c.gradient_dragvertising),
		("gradient-golden", &c.gradient_golden),
	]));
	images.insert("grid-pattern".into(), fixed::GRID_PATTERN.into());
	images
}
