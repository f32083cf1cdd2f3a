//! Hand-authored theme entries merged alongside the generated ones.
//!
//! These are not derived from tokens. Values must stay byte-identical to what
//! downstream apps were built against. Ramps list numeric shades before
//! `DEFAULT`, the order a JavaScript engine enumerates them in.

/// Shades of the golden ramp not covered by the `golden` token.
pub const GOLDEN_400: &str = "#FFB74D";
pub const GOLDEN_600: &str = "#FF9800";
pub const GOLDEN_700: &str = "#F57C00";

/// Shades of the warm orange ramp not covered by the `warm-orange` token.
pub const WARM_ORANGE_400: &str = "#FF8A65";
pub const WARM_ORANGE_600: &str = "#F4511E";

pub const DV_PURPLE: &[(&str, &str)] = &[
	("400", "#c084fc"),
	("500", "#a855f7"),
	("600", "#9333ea"),
	("900", "#581c87"),
	("DEFAULT", "#a855f7"),
];

pub const DV_PINK: &[(&str, &str)] = &[
	("300", "#f9a8d4"),
	("400", "#f472b6"),
	("500", "#ec4899"),
	("600", "#db2777"),
	("DEFAULT", "#ec4899"),
];

pub const DV_ORANGE: &[(&str, &str)] = &[
	("300", "#fdba74"),
	("400", "#fb923c"),
	("500", "#f97316"),
	("600", "#ea580c"),
	("DEFAULT", "#fb923c"),
];

/// Single-value semantic colors backed by CSS variables.
pub const SEMANTIC_COLORS: &[(&str, &str)] = &[
	("border", "hsl(var(--border))"),
	("input", "hsl(var(--input))"),
	("ring", "hsl(var(--ring))"),
	("background", "hsl(var(--background))"),
	("foreground", "hsl(var(--foreground))"),
];

/// Semantic colors with a `DEFAULT` and a `foreground` variant.
pub const SEMANTIC_PAIRS: &[&str] = &[
	"primary",
	"secondary",
	"destructive",
	"muted",
	"accent",
	"popover",
	"card",
];

pub const SIDEBAR: &[(&str, &str)] = &[
	("DEFAULT", "hsl(var(--sidebar-background))"),
	("foreground", "hsl(var(--sidebar-foreground))"),
	("primary", "hsl(var(--sidebar-primary))"),
	("primary-foreground", "hsl(var(--sidebar-primary-foreground))"),
	("accent", "hsl(var(--sidebar-accent))"),
	("accent-foreground", "hsl(var(--sidebar-accent-foreground))"),
	("border", "hsl(var(--sidebar-border))"),
	("ring", "hsl(var(--sidebar-ring))"),
];

/// Radius aliases driven by the `--radius` CSS variable.
pub const RADIUS_ALIASES: &[(&str, &str)] = &[
	("lg", "var(--radius)"),
	("md", "calc(var(--radius) - 2px)"),
	("sm", "calc(var(--radius) - 4px)"),
];

pub const ACCORDION_CONTENT_HEIGHT: &str = "var(--radix-accordion-content-height)";

pub const ACCORDION_ANIMATIONS: &[(&str, &str)] = &[
	("accordion-down", "accordion-down 0.2s ease-out"),
	("accordion-up", "accordion-up 0.2s ease-out"),
];

pub const TIMING_FUNCTIONS: &[(&str, &str)] = &[
	("dv-linear", "linear"),
	("dv-ease", "ease"),
	("dv-ease-in", "ease-in"),
	("dv-ease-out", "ease-out"),
	("dv-ease-in-out", "ease-in-out"),
];

/// Two-layer base shadow; there is no single elevation token for it.
pub const SHADOW_BASE: &str = "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)";

pub const GRADIENT_ALIASES: &[(&str, &str)] = &[
	("gradient-primary", "var(--gradient-primary)"),
	("gradient-secondary", "var(--gradient-secondary)"),
	("gradient-hero", "var(--gradient-hero)"),
];

pub const GRID_PATTERN: &str =
	"radial-gradient(circle at 1px 1px, rgba(255,255,255,0.15) 1px, transparent 0)";

pub const BACKGROUND_SIZES: &[(&str, &str)] = &[("300%", "300% 300%")];
