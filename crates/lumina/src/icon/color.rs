//! Icon color resolution.
//!
//! Callers describe the color they want as a [`ColorSpec`]; resolution
//! combines the spec with the paint mode and the host palette into one
//! concrete color. Resolution never fails: unrecognized or unparseable
//! specs degrade to opaque black with a log line, because a render with a
//! wrong color is recoverable in a way a silently wrong icon is not.

use lumina_render::Color;
use lumina_style::Palette;

/// How an icon color was requested.
///
/// A closed set of the accepted shapes; each carries only the data that
/// shape needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorSpec {
    /// No explicit color: follow the palette for the paint mode.
    #[default]
    Auto,
    /// A hex string such as `#ff0000`.
    Hex(String),
    /// Explicit 8-bit RGBA components.
    Rgba(u8, u8, u8, u8),
    /// An already-concrete color, used verbatim.
    Color(Color),
    /// Appearance-keyed colors (dark/light).
    ///
    /// Not resolvable without a live appearance signal from the host's
    /// theming layer; resolution substitutes the palette text color.
    PerAppearance { dark: String, light: String },
}

impl From<&str> for ColorSpec {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<(u8, u8, u8, u8)> for ColorSpec {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::Rgba(r, g, b, a)
    }
}

/// The paint mode an icon is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconMode {
    /// Normal/default state.
    #[default]
    Normal,
    /// Disabled/inactive state.
    Disabled,
    /// Active/pressed state.
    Active,
    /// Selected/checked state.
    Selected,
}

/// Resolve a color spec against the paint mode and the host palette.
pub fn resolve_color(spec: &ColorSpec, mode: IconMode, palette: &Palette) -> Color {
    match spec {
        ColorSpec::Auto => {
            if mode == IconMode::Disabled {
                palette.disabled_text()
            } else {
                palette.text()
            }
        }
        ColorSpec::Hex(hex) => Color::from_hex(hex).unwrap_or_else(|| {
            tracing::warn!("unparseable icon color '{}', using black", hex);
            Color::BLACK
        }),
        ColorSpec::Rgba(r, g, b, a) => Color::from_rgba8(*r, *g, *b, *a),
        ColorSpec::Color(color) => *color,
        ColorSpec::PerAppearance { .. } => {
            // Appearance-keyed colors need the theming collaborator's
            // current-appearance signal, which this core does not consume.
            tracing::debug!("appearance-keyed icon color without theme context, using text color");
            palette.text()
        }
    }
}
