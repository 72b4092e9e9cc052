//! Widget base implementation.
//!
//! This module provides [`WidgetBase`], the common implementation details for
//! all widgets: geometry, mouse tracking, style text, repaint bookkeeping,
//! installed event filters, and the decoration marker that keeps runtime
//! decoration attachment idempotent.

use std::rc::Rc;

use lumina_render::{Point, Rect, Size};

use super::dispatcher::FilterHandle;

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and delegate common
/// operations to it:
///
/// ```ignore
/// struct Panel {
///     base: WidgetBase,
/// }
///
/// impl Widget for Panel {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///     fn paint(&self, ctx: &mut PaintContext<'_>) { /* ... */ }
/// }
/// ```
pub struct WidgetBase {
    /// The widget's geometry (position relative to parent and size).
    geometry: Rect,

    /// Whether mouse move events are delivered without a button held.
    mouse_tracking: bool,

    /// The widget's own style text.
    style_sheet: String,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Marker set by runtime decorations so repeated attachment is a no-op.
    decorated: bool,

    /// Event filters installed on this widget, in installation order.
    event_filters: Vec<FilterHandle>,
}

impl WidgetBase {
    /// Create a new widget base.
    pub fn new() -> Self {
        Self {
            geometry: Rect::ZERO,
            mouse_tracking: false,
            style_sheet: String::new(),
            needs_repaint: true,
            decorated: false,
            event_filters: Vec::new(),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get a rectangle representing the widget's local coordinate space.
    ///
    /// This is always positioned at (0, 0) with the widget's size.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    // =========================================================================
    // Mouse Tracking
    // =========================================================================

    /// Check if mouse move events are delivered without a button held.
    #[inline]
    pub fn has_mouse_tracking(&self) -> bool {
        self.mouse_tracking
    }

    /// Enable or disable mouse tracking.
    pub fn set_mouse_tracking(&mut self, enabled: bool) {
        self.mouse_tracking = enabled;
    }

    // =========================================================================
    // Style Text
    // =========================================================================

    /// Get the widget's own style text.
    pub fn style_sheet(&self) -> &str {
        &self.style_sheet
    }

    /// Set the widget's own style text.
    pub fn set_style_sheet(&mut self, sheet: impl Into<String>) {
        self.style_sheet = sheet.into();
        self.needs_repaint = true;
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    ///
    /// Repaints are scheduled, not forced: multiple requests before the next
    /// paint coalesce into one visual update.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub(crate) fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Decoration Marker
    // =========================================================================

    /// Check whether a runtime decoration is already attached.
    #[inline]
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Mark the widget as carrying a runtime decoration.
    pub(crate) fn mark_decorated(&mut self) {
        self.decorated = true;
    }

    // =========================================================================
    // Event Filters
    // =========================================================================

    /// Install an event filter on this widget.
    ///
    /// Installing the same filter object twice is a no-op.
    pub fn install_event_filter(&mut self, filter: FilterHandle) {
        if self
            .event_filters
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &filter))
        {
            return;
        }
        self.event_filters.push(filter);
    }

    /// Remove an event filter from this widget.
    ///
    /// Returns `true` if the filter was found and removed.
    pub fn remove_event_filter(&mut self, filter: &FilterHandle) -> bool {
        if let Some(pos) = self
            .event_filters
            .iter()
            .position(|existing| Rc::ptr_eq(existing, filter))
        {
            self.event_filters.remove(pos);
            true
        } else {
            false
        }
    }

    /// Get the installed event filters, in installation order.
    pub fn event_filters(&self) -> &[FilterHandle] {
        &self.event_filters
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_and_local_rect() {
        let mut base = WidgetBase::new();
        base.set_geometry(Rect::new(10.0, 20.0, 100.0, 50.0));

        assert_eq!(base.rect(), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(base.contains_point(Point::new(99.0, 49.0)));
        assert!(!base.contains_point(Point::new(100.0, 50.0)));
        assert_eq!(base.map_from_parent(Point::new(15.0, 25.0)), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_repaint_coalescing() {
        let mut base = WidgetBase::new();
        base.clear_repaint_flag();
        assert!(!base.needs_repaint());

        base.update();
        base.update();
        assert!(base.needs_repaint());

        base.clear_repaint_flag();
        assert!(!base.needs_repaint());
    }

    #[test]
    fn test_decoration_marker() {
        let mut base = WidgetBase::new();
        assert!(!base.is_decorated());
        base.mark_decorated();
        assert!(base.is_decorated());
    }

    #[test]
    fn test_filter_install_is_deduplicated() {
        use std::cell::RefCell;

        use super::super::dispatcher::EventFilter;
        use super::super::events::WidgetEvent;
        use super::super::tree::{WidgetId, WidgetTree};

        struct Noop;
        impl EventFilter for Noop {
            fn event_filter(
                &mut self,
                _tree: &mut WidgetTree,
                _target: WidgetId,
                _event: &mut WidgetEvent,
            ) -> bool {
                false
            }
        }

        let mut base = WidgetBase::new();
        let filter: FilterHandle = Rc::new(RefCell::new(Noop));

        base.install_event_filter(Rc::clone(&filter));
        base.install_event_filter(Rc::clone(&filter));
        assert_eq!(base.event_filters().len(), 1);

        assert!(base.remove_event_filter(&filter));
        assert!(base.event_filters().is_empty());
        assert!(!base.remove_event_filter(&filter));
    }
}
