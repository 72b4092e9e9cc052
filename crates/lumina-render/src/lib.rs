//! CPU rendering primitives for Lumina.
//!
//! This crate provides the rendering vocabulary shared by the widget seam and
//! the icon engine:
//!
//! - **Geometry & color**: [`Point`], [`Size`], [`Rect`], [`CornerRadii`],
//!   [`Color`], and vector [`Path`]s
//! - **Paints**: solid and radial-gradient fills ([`Paint`])
//! - **Painter seam**: the [`Painter`] trait the host renderer implements
//! - **SVG**: [`SvgDocument`] for recoloring, rotating, and rasterizing
//!   vector markup into [`RasterImage`] snapshots

mod error;
mod paint;
mod painter;
mod raster;
mod svg;
mod types;

pub use error::{RenderError, RenderResult};
pub use raster::RasterImage;
pub use paint::{GradientStop, Paint, RadialGradient};
pub use painter::Painter;
pub use svg::SvgDocument;
pub use types::{Color, CornerRadii, Path, PathCommand, Point, Rect, Size};
