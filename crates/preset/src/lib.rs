//! Tailwind CSS preset generation for the Dragvertising design system.
//!
//! The pipeline has three stages, each usable on its own:
//!
//! 1. [`compile`] maps a validated [`TokenSet`] to a [`Preset`], whose
//!    `theme.extend` section is the [`ThemeExtension`] document. Generated
//!    keys carry the `dv-` prefix; hand-authored aliases and fixed ramps are
//!    merged in verbatim.
//! 2. [`render`] embeds the preset in JavaScript source with an
//!    auto-generated header, a timestamp and an export for the chosen
//!    [`ModuleFormat`].
//! 3. [`artifact`] writes the source atomically, or checks an existing file
//!    for drift without touching it.
//!
//! [`TokenSet`]: dv_tokens::TokenSet

pub mod artifact;
pub mod compile;
pub mod error;
pub mod extension;
pub mod render;

pub use artifact::{Freshness, check, generate, write_atomic};
pub use compile::{PREFIX, compile, compile_documents};
pub use error::{PresetError, Result};
pub use extension::{Preset, Theme, ThemeExtension, ThemeMap, ThemeValue};
pub use render::{ModuleFormat, extract_preset, render};
