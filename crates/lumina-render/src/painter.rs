//! The abstract paint surface widgets draw through.
//!
//! Lumina does not own a renderer; the host toolkit supplies one by
//! implementing [`Painter`]. Decorations compose on top of whatever the host
//! draws by issuing further fill commands through the same surface.

use crate::paint::Paint;
use crate::types::{Color, Path, Rect};

/// Paint surface abstraction implemented by the host's renderer.
///
/// All fills are expected to be antialiased; coordinates are in the local
/// space of the widget currently being painted.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a path with the given paint (solid or gradient).
    fn fill_path(&mut self, path: &Path, paint: &Paint);
}
