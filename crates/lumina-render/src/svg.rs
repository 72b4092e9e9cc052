//! SVG markup handling and rasterization.
//!
//! This module provides [`SvgDocument`], which owns a piece of SVG markup and
//! can recolor it, rotate it, and rasterize it at any pixel size. Recoloring
//! and rotation operate on the markup itself (wrapping the document content in
//! attribute-carrying groups) so the result stays a plain SVG document that
//! renders identically anywhere.
//!
//! Rasterization goes through resvg/tiny-skia and produces a straight-alpha
//! [`RasterImage`].

use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{RenderError, RenderResult};
use crate::raster::RasterImage;
use crate::types::{Color, Size};

/// An SVG document that can be recolored, rotated, and rasterized.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    /// The (possibly transformed) SVG markup.
    markup: String,
    /// Natural size of the document, from its width/height or viewBox.
    natural_size: Size,
}

impl SvgDocument {
    /// Parse SVG markup.
    ///
    /// The markup is validated eagerly; malformed input is an error rather
    /// than a deferred rasterization failure.
    pub fn from_markup(markup: impl Into<String>) -> RenderResult<Self> {
        let markup = markup.into();
        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(markup.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size();
        let natural_size = Size::new(size.width(), size.height());

        Ok(Self {
            markup,
            natural_size,
        })
    }

    /// Get the natural/default size of the SVG.
    ///
    /// This is the size defined in the SVG's `width`/`height` attributes
    /// or `viewBox`.
    pub fn natural_size(&self) -> Size {
        self.natural_size
    }

    /// Get the current markup text.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Apply a fill directive to the whole document.
    ///
    /// The document content is wrapped in a group carrying `fill` (and
    /// `fill-opacity` for translucent colors), so elements without an
    /// explicit fill of their own inherit the new color.
    pub fn with_fill(mut self, color: Color) -> Self {
        let mut attrs = format!(r#"fill="{}""#, color.to_hex_rgb());
        if color.a < 1.0 {
            attrs.push_str(&format!(r#" fill-opacity="{:.4}""#, color.a));
        }
        self.wrap_content(&attrs);
        self
    }

    /// Apply a rotation (in degrees, clockwise) about the document center.
    ///
    /// A rotation of zero is a no-op.
    pub fn with_rotation(mut self, degrees: i32) -> Self {
        if degrees == 0 {
            return self;
        }
        let cx = self.natural_size.width / 2.0;
        let cy = self.natural_size.height / 2.0;
        let attrs = format!(r#"transform="rotate({degrees} {cx} {cy})""#);
        self.wrap_content(&attrs);
        self
    }

    /// Wrap the document content in `<g {attrs}>...</g>`.
    fn wrap_content(&mut self, attrs: &str) {
        // Validated at parse time; a document without an svg element cannot
        // reach here.
        let Some(svg_start) = self.markup.find("<svg") else {
            return;
        };
        let Some(open_len) = self.markup[svg_start..].find('>') else {
            return;
        };
        let open_end = svg_start + open_len;
        let Some(close_start) = self.markup.rfind("</svg>") else {
            return;
        };

        let content = &self.markup[open_end + 1..close_start];
        self.markup = format!(
            "{}<g {attrs}>{content}</g>{}",
            &self.markup[..open_end + 1],
            &self.markup[close_start..],
        );
    }

    /// Rasterize the document into an RGBA image at an exact pixel size.
    ///
    /// The document is scaled (non-uniformly if necessary) from its natural
    /// size to fill the requested dimensions.
    pub fn render(&self, width: u32, height: u32) -> RenderResult<RasterImage> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let options = usvg::Options::default();
        let tree = usvg::Tree::from_data(self.markup.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::InvalidDimensions { width, height })?;

        // Scale the natural size to the target size
        let sx = width as f32 / self.natural_size.width;
        let sy = height as f32 / self.natural_size.height;
        let transform = tiny_skia::Transform::from_scale(sx, sy);

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // Convert from premultiplied RGBA to straight RGBA
        let data = pixmap.data();
        let mut result = Vec::with_capacity(data.len());

        for chunk in data.chunks(4) {
            let a = chunk[3] as f32 / 255.0;
            if a > 0.0 {
                result.push((chunk[0] as f32 / a).min(255.0) as u8);
                result.push((chunk[1] as f32 / a).min(255.0) as u8);
                result.push((chunk[2] as f32 / a).min(255.0) as u8);
                result.push(chunk[3]);
            } else {
                result.extend_from_slice(&[0, 0, 0, 0]);
            }
        }

        RasterImage::from_rgba(width, height, result)
    }
}
