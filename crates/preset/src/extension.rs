//! The theme extension document and the preset wrapping it.

use dv_tokens::{FontStack, Keyframes, Scalar};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Ordered mapping from theme key to value.
pub type ThemeMap = IndexMap<String, ThemeValue>;

/// A value under one of the theme extension sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThemeValue {
	/// A resolved token or composite string.
	Scalar(Scalar),
	/// A font stack.
	List(Vec<String>),
	/// A nested mapping such as a color ramp.
	Map(ThemeMap),
	/// Keyframes or other structure carried through verbatim.
	Raw(Value),
}

impl ThemeValue {
	/// Builds a nested mapping from literal pairs.
	pub fn map<K: Into<String>, V: Into<ThemeValue>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
		Self::Map(theme_map(entries))
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Scalar(s) => s.as_str(),
			_ => None,
		}
	}

	pub fn get(&self, key: &str) -> Option<&ThemeValue> {
		match self {
			Self::Map(map) => map.get(key),
			_ => None,
		}
	}
}

impl From<&str> for ThemeValue {
	fn from(s: &str) -> Self {
		Self::Scalar(s.into())
	}
}

impl From<String> for ThemeValue {
	fn from(s: String) -> Self {
		Self::Scalar(Scalar::String(s))
	}
}

impl From<Scalar> for ThemeValue {
	fn from(s: Scalar) -> Self {
		Self::Scalar(s)
	}
}

impl From<&Scalar> for ThemeValue {
	fn from(s: &Scalar) -> Self {
		Self::Scalar(s.clone())
	}
}

impl From<&FontStack> for ThemeValue {
	fn from(stack: &FontStack) -> Self {
		match stack {
			FontStack::Single(name) => Self::Scalar(Scalar::String(name.clone())),
			FontStack::Stack(names) => Self::List(names.clone()),
		}
	}
}

impl From<&Keyframes> for ThemeValue {
	fn from(keyframes: &Keyframes) -> Self {
		Self::Raw(Value::Object(keyframes.0.clone()))
	}
}

/// Builds a [`ThemeMap`] from literal pairs, keeping their order.
pub fn theme_map<K: Into<String>, V: Into<ThemeValue>>(
	entries: impl IntoIterator<Item = (K, V)>,
) -> ThemeMap {
	entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

/// The `theme.extend` section of a Tailwind preset.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
	pub font_family: ThemeMap,
	pub colors: ThemeMap,
	pub border_radius: ThemeMap,
	pub spacing: ThemeMap,
	pub font_size: ThemeMap,
	pub font_weight: ThemeMap,
	pub keyframes: ThemeMap,
	pub animation: ThemeMap,
	pub transition_duration: ThemeMap,
	pub transition_timing_function: ThemeMap,
	pub box_shadow: ThemeMap,
	pub background_image: ThemeMap,
	pub background_size: ThemeMap,
}

impl ThemeExtension {
	/// Serialized top-level keys, in output order.
	pub const KEYS: [&'static str; 13] = [
		"fontFamily",
		"colors",
		"borderRadius",
		"spacing",
		"fontSize",
		"fontWeight",
		"keyframes",
		"animation",
		"transitionDuration",
		"transitionTimingFunction",
		"boxShadow",
		"backgroundImage",
		"backgroundSize",
	];

	/// Looks up a section by its serialized key.
	pub fn section(&self, key: &str) -> Option<&ThemeMap> {
		Some(match key {
			"fontFamily" => &self.font_family,
			"colors" => &self.colors,
			"borderRadius" => &self.border_radius,
			"spacing" => &self.spacing,
			"fontSize" => &self.font_size,
			"fontWeight" => &self.font_weight,
			"keyframes" => &self.keyframes,
			"animation" => &self.animation,
			"transitionDuration" => &self.transition_duration,
			"transitionTimingFunction" => &self.transition_timing_function,
			"boxShadow" => &self.box_shadow,
			"backgroundImage" => &self.background_image,
			"backgroundSize" => &self.background_size,
			_ => return None,
		})
	}
}

/// A Tailwind preset. Presets only carry the `extend` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
	pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
	pub extend: ThemeExtension,
}

impl Preset {
	pub fn new(extend: ThemeExtension) -> Self {
		Self {
			theme: Theme { extend },
		}
	}

	pub fn extension(&self) -> &ThemeExtension {
		&self.theme.extend
	}
}
