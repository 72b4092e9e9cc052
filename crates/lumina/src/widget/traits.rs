//! Core widget trait definitions.
//!
//! This module defines the [`Widget`] trait, the seam through which arbitrary
//! host widgets become decorable, and [`PaintContext`], the rendering context
//! passed to [`Widget::paint`].

use lumina_render::{Painter, Point, Rect, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;

/// Context provided during widget painting.
///
/// This wraps the host's [`Painter`] and provides the widget's geometry and
/// the application-wide style text for convenient access during the paint
/// operation.
pub struct PaintContext<'a> {
    /// The painter to draw with.
    painter: &'a mut dyn Painter,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    /// The application-wide style text.
    app_style_sheet: &'a str,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(painter: &'a mut dyn Painter, widget_rect: Rect) -> Self {
        Self {
            painter,
            widget_rect,
            app_style_sheet: "",
        }
    }

    /// Set the application-wide style text (builder pattern).
    #[inline]
    pub fn with_app_style_sheet(mut self, sheet: &'a str) -> Self {
        self.app_style_sheet = sheet;
        self
    }

    /// Get the painter.
    #[inline]
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.widget_rect.size
    }

    /// Get the application-wide style text.
    ///
    /// The returned reference borrows the context's backing data, not the
    /// context itself, so it stays usable while drawing.
    #[inline]
    pub fn app_style_sheet(&self) -> &'a str {
        self.app_style_sheet
    }
}

/// The core trait for all widgets.
///
/// # Required Methods
///
/// Implementors provide access to the underlying [`WidgetBase`] plus a
/// [`paint`](Self::paint) routine. Everything else has default
/// implementations that delegate to the base.
///
/// # Events
///
/// The [`event`](Self::event) method is the main event dispatch hook; return
/// `true` (or accept the event) to stop propagation to ancestors. Decorations
/// observe events through installed event filters instead of overriding this.
pub trait Widget {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Paint the widget.
    ///
    /// The painter is already translated so that (0, 0) is the top-left
    /// corner of the widget. Use `ctx.rect()` to get the full bounds.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle a widget event.
    ///
    /// Return `true` if the event was handled and should not propagate
    /// further. The default implementation returns `false`.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    // =========================================================================
    // Geometry (default implementations delegate to WidgetBase)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }

    // =========================================================================
    // Update / Repaint
    // =========================================================================

    /// Request a repaint of the widget.
    ///
    /// This schedules a repaint for the next frame. Multiple calls before
    /// the next paint are coalesced.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Check if the widget needs to be repainted.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }
}
