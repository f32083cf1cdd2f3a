//! Typed token categories.
//!
//! Each category is read from its document through a [`Node`] and checked
//! for every field the preset needs. Once a [`TokenSet`] exists, all of its
//! values are resolved scalars or composites.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;
use crate::load::{Document, TokenDocuments};
use crate::node::Node;
use crate::value::{Scalar, ValueKind};

/// Spacing steps, in scale order.
pub const SPACING_STEPS: &[&str] = &[
	"px", "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
	"12", "14", "16", "20", "24", "28", "32", "36", "40",
];

/// Font sizes, smallest first.
pub const FONT_SIZES: &[&str] = &[
	"xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
];

/// Border radii, smallest first.
pub const RADII: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

/// Elevation levels, lowest first.
pub const ELEVATIONS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

/// Named animations; each has both a keyframes entry and a preset.
pub const ANIMATIONS: &[&str] = &["fade-in", "slide-up", "glow-pulse", "gradient", "shimmer", "float"];

/// All six categories, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSet {
	pub colors: ColorTokens,
	pub typography: TypographyTokens,
	pub spacing: SpacingTokens,
	pub borders: BorderTokens,
	pub shadows: ShadowTokens,
	pub animations: AnimationTokens,
}

impl TokenSet {
	/// Validates already-parsed documents.
	///
	/// Stops at the first missing or malformed field.
	pub fn from_documents(docs: &TokenDocuments) -> Result<Self> {
		let set = Self {
			colors: ColorTokens::read(&Node::root(Document::Colors, &docs.colors)?)?,
			typography: TypographyTokens::read(&Node::root(Document::Typography, &docs.typography)?)?,
			spacing: SpacingTokens::read(&Node::root(Document::Spacing, &docs.spacing)?)?,
			borders: BorderTokens::read(&Node::root(Document::Borders, &docs.borders)?)?,
			shadows: ShadowTokens::read(&Node::root(Document::Shadows, &docs.shadows)?)?,
			animations: AnimationTokens::read(&Node::root(Document::Animations, &docs.animations)?)?,
		};
		debug!("validated token documents");
		Ok(set)
	}
}

/// Fixed, ordered set of named tokens such as a spacing scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale<T> {
	entries: Vec<(&'static str, T)>,
}

impl<T> Scale<T> {
	/// Reads every step in `steps` from `node`, in order.
	pub fn read<'a>(
		node: &Node<'a>,
		steps: &[&'static str],
		mut resolve: impl FnMut(&Node<'a>) -> Result<T>,
	) -> Result<Self> {
		let mut entries = Vec::with_capacity(steps.len());
		for &step in steps {
			entries.push((step, resolve(&node.get(step)?)?));
		}
		Ok(Self { entries })
	}

	pub fn get(&self, step: &str) -> Option<&T> {
		self.entries.iter().find(|(name, _)| *name == step).map(|(_, v)| v)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> {
		self.entries.iter().map(|(name, v)| (*name, v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

// ── colors.json ──

#[derive(Debug, Clone, PartialEq)]
pub struct ColorTokens {
	pub pink: Scalar,
	pub golden: Scalar,
	pub warm_orange: Scalar,
	pub gradient_dragvertising: Scalar,
	pub gradient_golden: Scalar,
}

impl ColorTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		let brand = root.get("brand")?;
		let gradients = root.get("gradients")?;
		Ok(Self {
			pink: brand.scalar_at("pink")?,
			golden: brand.scalar_at("golden")?,
			warm_orange: brand.scalar_at("warm-orange")?,
			gradient_dragvertising: gradients.scalar_at("dragvertising")?,
			gradient_golden: gradients.scalar_at("golden")?,
		})
	}
}

// ── typography.json ──

/// A font-family token: one family name or a fallback stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FontStack {
	Single(String),
	Stack(Vec<String>),
}

impl FontStack {
	fn read(node: &Node<'_>) -> Result<Self> {
		let inner = node.unwrapped()?;
		match inner.value() {
			Value::String(s) => Ok(Self::Single(s.clone())),
			Value::Array(_) => inner.strings().map(Self::Stack),
			other => Err(inner.malformed("a string or string array", ValueKind::of(other))),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypographyTokens {
	pub sans: FontStack,
	pub serif: FontStack,
	pub display: FontStack,
	pub londrina: FontStack,
	pub font_size: Scale<Scalar>,
	pub regular: Scalar,
	pub semibold: Scalar,
	pub bold: Scalar,
}

impl TypographyTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		let family = root.get("font-family")?;
		let weight = root.get("font-weight")?;
		Ok(Self {
			sans: FontStack::read(&family.get("sans")?)?,
			serif: FontStack::read(&family.get("serif")?)?,
			display: FontStack::read(&family.get("display")?)?,
			londrina: FontStack::read(&family.get("londrina")?)?,
			font_size: Scale::read(&root.get("font-size")?, FONT_SIZES, Node::scalar)?,
			regular: weight.scalar_at("regular")?,
			semibold: weight.scalar_at("semibold")?,
			bold: weight.scalar_at("bold")?,
		})
	}
}

// ── spacing.json ──

#[derive(Debug, Clone, PartialEq)]
pub struct SpacingTokens {
	pub steps: Scale<Scalar>,
}

impl SpacingTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		Ok(Self {
			steps: Scale::read(root, SPACING_STEPS, Node::scalar)?,
		})
	}
}

// ── borders.json ──

#[derive(Debug, Clone, PartialEq)]
pub struct BorderTokens {
	pub radius: Scale<Scalar>,
}

impl BorderTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		Ok(Self {
			radius: Scale::read(&root.get("radius")?, RADII, Node::scalar)?,
		})
	}
}

// ── shadows.json ──

/// A single CSS box shadow built from its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
	pub offset_x: Scalar,
	pub offset_y: Scalar,
	pub blur: Scalar,
	pub spread: Option<Scalar>,
	pub color: Scalar,
}

impl Shadow {
	fn read(node: &Node<'_>) -> Result<Self> {
		Self::from_fields(&node.unwrapped()?)
	}

	fn from_fields(fields: &Node<'_>) -> Result<Self> {
		Ok(Self {
			offset_x: fields.scalar_at("offsetX")?,
			offset_y: fields.scalar_at("offsetY")?,
			blur: fields.scalar_at("blur")?,
			spread: fields.get_optional("spread")?.map(|n| n.scalar()).transpose()?,
			color: fields.scalar_at("color")?,
		})
	}
}

/// Renders `offsetX offsetY blur [spread] color`.
impl fmt::Display for Shadow {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {} {}", self.offset_x, self.offset_y, self.blur)?;
		if let Some(spread) = &self.spread {
			write!(f, " {spread}")?;
		}
		write!(f, " {}", self.color)
	}
}

/// A shadow token given either as a ready CSS string or as parts.
#[derive(Debug, Clone, PartialEq)]
pub enum ShadowValue {
	Literal(Scalar),
	Composite(Shadow),
}

impl ShadowValue {
	fn read(node: &Node<'_>) -> Result<Self> {
		let inner = node.unwrapped()?;
		match inner.value() {
			Value::Object(_) => Shadow::from_fields(&inner).map(Self::Composite),
			_ => inner.scalar().map(Self::Literal),
		}
	}
}

impl fmt::Display for ShadowValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(s) => fmt::Display::fmt(s, f),
			Self::Composite(shadow) => fmt::Display::fmt(shadow, f),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowTokens {
	pub elevation: Scale<Shadow>,
	pub glow_primary: ShadowValue,
	pub glow_primary_strong: ShadowValue,
	pub glow_golden: ShadowValue,
	pub glow_golden_strong: ShadowValue,
}

impl ShadowTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		let glow = root.get("glow")?;
		Ok(Self {
			elevation: Scale::read(&root.get("elevation")?, ELEVATIONS, Shadow::read)?,
			glow_primary: ShadowValue::read(&glow.get("primary")?)?,
			glow_primary_strong: ShadowValue::read(&glow.get("primary-strong")?)?,
			glow_golden: ShadowValue::read(&glow.get("golden")?)?,
			glow_golden_strong: ShadowValue::read(&glow.get("golden-strong")?)?,
		})
	}
}

// ── animations.json ──

/// A keyframes definition, carried through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Keyframes(pub Map<String, Value>);

impl Keyframes {
	fn read(node: &Node<'_>) -> Result<Self> {
		node.object().map(Self)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTokens {
	pub fast: Scalar,
	pub normal: Scalar,
	pub moderate: Scalar,
	pub slow: Scalar,
	pub keyframes: Scale<Keyframes>,
	pub presets: Scale<Scalar>,
}

impl AnimationTokens {
	fn read(root: &Node<'_>) -> Result<Self> {
		let duration = root.get("duration")?;
		Ok(Self {
			fast: duration.scalar_at("fast")?,
			normal: duration.scalar_at("normal")?,
			moderate: duration.scalar_at("moderate")?,
			slow: duration.scalar_at("slow")?,
			keyframes: Scale::read(&root.get("keyframes")?, ANIMATIONS, Keyframes::read)?,
			presets: Scale::read(&root.get("presets")?, ANIMATIONS, Node::scalar)?,
		})
	}
}
