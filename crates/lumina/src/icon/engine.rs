//! Icon render requests and mode-reactive handles.
//!
//! A one-shot render produces a [`RasterImage`] — a frozen snapshot for one
//! paint mode. An [`Icon`] handle instead keeps the vector source and the
//! color spec, and re-resolves the color on every
//! [`pixmap`](Icon::pixmap) call, so the same handle stays correct across
//! enabled/disabled/selected paint passes.

use lumina_render::{Color, RasterImage, SvgDocument};
use lumina_style::Palette;

use super::catalog;
use super::color::{ColorSpec, IconMode, resolve_color};
use super::IconResult;

/// Pixel size used when a request does not specify one.
pub const DEFAULT_ICON_SIZE: (u32, u32) = (50, 50);

/// A builder describing one icon render.
///
/// ```ignore
/// use lumina::icon::{IconRequest, IconMode};
/// use lumina_style::Palette;
///
/// let palette = Palette::dark();
/// let image = IconRequest::new("settings")
///     .size(32, 32)
///     .color("#8ab4f8")
///     .render(&palette)?;
/// ```
#[derive(Debug, Clone)]
pub struct IconRequest {
    name: String,
    filled: bool,
    size: Option<(u32, u32)>,
    color: ColorSpec,
    rotation: i32,
    mode: IconMode,
}

impl IconRequest {
    /// Start a request for a named icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filled: false,
            size: None,
            color: ColorSpec::Auto,
            rotation: 0,
            mode: IconMode::Normal,
        }
    }

    /// Request the filled variant (falls back to outline when absent).
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Set the output size in pixels. Defaults to [`DEFAULT_ICON_SIZE`].
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Set the color specification.
    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    /// Rotate the icon by the given degrees (clockwise).
    pub fn rotation(mut self, degrees: i32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Set the paint mode used for palette-driven coloring.
    pub fn mode(mut self, mode: IconMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rasterize into a frozen snapshot for this request's mode.
    ///
    /// The caller owns the returned image; the engine retains nothing.
    pub fn render(&self, palette: &Palette) -> IconResult<RasterImage> {
        let markup = catalog::lookup(&self.name, self.filled)?;
        let color = resolve_color(&self.color, self.mode, palette);
        let (width, height) = self.size.unwrap_or(DEFAULT_ICON_SIZE);
        rasterize(markup, self.rotation, color, width, height)
    }

    /// Produce a reusable, mode-reactive handle.
    ///
    /// The catalog lookup happens now, so an unknown name fails here rather
    /// than at first paint.
    pub fn into_icon(self) -> IconResult<Icon> {
        let markup = catalog::lookup(&self.name, self.filled)?;
        Ok(Icon {
            markup,
            color: self.color,
            rotation: self.rotation,
        })
    }
}

/// A reusable icon handle.
///
/// Unlike a rendered snapshot, the handle stays stylable: every
/// [`pixmap`](Self::pixmap) call re-resolves the color for the requested
/// paint mode against the palette handed in at that moment.
#[derive(Debug, Clone)]
pub struct Icon {
    markup: &'static str,
    color: ColorSpec,
    rotation: i32,
}

impl Icon {
    /// Rasterize for one paint mode.
    pub fn pixmap(
        &self,
        size: Option<(u32, u32)>,
        mode: IconMode,
        palette: &Palette,
    ) -> IconResult<RasterImage> {
        let color = resolve_color(&self.color, mode, palette);
        let (width, height) = size.unwrap_or(DEFAULT_ICON_SIZE);
        rasterize(self.markup, self.rotation, color, width, height)
    }
}

/// Rotation, then coloring, then rasterization.
fn rasterize(
    markup: &str,
    rotation: i32,
    color: Color,
    width: u32,
    height: u32,
) -> IconResult<RasterImage> {
    let mut doc = SvgDocument::from_markup(markup)?;
    if rotation != 0 {
        doc = doc.with_rotation(rotation);
    }
    Ok(doc.with_fill(color).render(width, height)?)
}

/// Render a named icon with palette-driven coloring.
///
/// Convenience wrapper over [`IconRequest`] for the common "give me this
/// icon at this size" case.
pub fn render_icon(
    name: &str,
    size: Option<(u32, u32)>,
    palette: &Palette,
) -> IconResult<RasterImage> {
    let mut request = IconRequest::new(name);
    if let Some((width, height)) = size {
        request = request.size(width, height);
    }
    request.render(palette)
}
