//! Design token documents for the Dragvertising design system.
//!
//! Tokens live in six JSON documents (`colors.json`, `typography.json`,
//! `spacing.json`, `borders.json`, `shadows.json`, `animations.json`). Each
//! leaf is either a bare literal or an object carrying a `$value` field:
//!
//! ```json
//! {
//!   "spacing": {
//!     "px": "1px",
//!     "4": { "$value": "1rem", "$type": "dimension" }
//!   }
//! }
//! ```
//!
//! Documents are validated once, at load time, into a [`TokenSet`]: one typed
//! struct per category. Every missing or malformed field is reported with the
//! document it came from and its dotted path (`shadows.elevation.sm`), so code
//! consuming a [`TokenSet`] never performs fallible lookups.

pub mod error;
pub mod load;
pub mod node;
pub mod schema;
pub mod value;

pub use error::{Result, TokenError};
pub use load::{Document, TokenDocuments};
pub use node::Node;
pub use schema::{
	AnimationTokens, BorderTokens, ColorTokens, FontStack, Keyframes, Scale, Shadow, ShadowTokens,
	ShadowValue, SpacingTokens, TokenSet, TypographyTokens,
};
pub use value::{Scalar, VALUE_KEY, ValueKind};
