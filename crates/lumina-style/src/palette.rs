//! The host palette surface.
//!
//! Decorations and the icon engine read exactly two facts from the host's
//! active palette: the normal text color and the disabled text color. The
//! palette is constructed by the host environment (theme loader, platform
//! integration); this crate never writes to it.

use lumina_render::Color;

use crate::error::{Error, Result};

/// The colors the rendering core reads from the host's active palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    text: Color,
    disabled_text: Color,
}

impl Palette {
    /// Create a palette from explicit colors.
    pub fn new(text: Color, disabled_text: Color) -> Self {
        Self {
            text,
            disabled_text,
        }
    }

    /// Create a palette from hex color strings.
    pub fn from_hex(text: &str, disabled_text: &str) -> Result<Self> {
        Ok(Self {
            text: Color::from_hex(text).ok_or_else(|| Error::invalid_color(text))?,
            disabled_text: Color::from_hex(disabled_text)
                .ok_or_else(|| Error::invalid_color(disabled_text))?,
        })
    }

    /// A palette matching a typical light theme.
    pub fn light() -> Self {
        Self {
            text: Color::from_rgb8(0x20, 0x20, 0x20),
            disabled_text: Color::from_rgb8(0x9e, 0x9e, 0x9e),
        }
    }

    /// A palette matching a typical dark theme.
    pub fn dark() -> Self {
        Self {
            text: Color::from_rgb8(0xe4, 0xe4, 0xe4),
            disabled_text: Color::from_rgb8(0x6b, 0x6b, 0x6b),
        }
    }

    /// The normal text/foreground color.
    #[inline]
    pub fn text(&self) -> Color {
        self.text
    }

    /// The text color for disabled elements.
    #[inline]
    pub fn disabled_text(&self) -> Color {
        self.disabled_text
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_from_hex() {
        let palette = Palette::from_hex("#202020", "#9e9e9e").unwrap();
        assert_eq!(palette.text(), Color::from_rgb8(0x20, 0x20, 0x20));
        assert_eq!(palette.disabled_text(), Color::from_rgb8(0x9e, 0x9e, 0x9e));
    }

    #[test]
    fn test_palette_from_bad_hex() {
        let err = Palette::from_hex("#zzz", "#9e9e9e").unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }));
    }

    #[test]
    fn test_light_dark_differ() {
        assert_ne!(Palette::light(), Palette::dark());
    }
}
