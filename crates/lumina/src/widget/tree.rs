//! Retained widget storage and pointer-event routing.
//!
//! [`WidgetTree`] owns every widget as a `Box<dyn Widget>` keyed by a slotmap
//! [`WidgetId`], together with the parent/child links and the application-wide
//! style text. It is the storage the event dispatcher and the decoration
//! machinery operate on.
//!
//! The tree does not do hit testing; the host's windowing layer decides which
//! widget a pointer event targets and hands it to one of the `route_*`
//! helpers, which map window coordinates into the target's local space and
//! run full dispatch (filters, handler, bubbling).

use slotmap::{SlotMap, new_key_type};

use lumina_render::{Painter, Point};

use super::dispatcher::{DispatchResult, EventDispatcher};
use super::events::{
    EnterEvent, KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, WidgetEvent,
};
use super::traits::{PaintContext, Widget};

new_key_type! {
    /// Unique identity of a widget within a [`WidgetTree`].
    pub struct WidgetId;
}

struct Node {
    /// `None` only transiently, while the widget is being wrapped in place.
    widget: Option<Box<dyn Widget>>,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
}

/// Retained storage for a tree of widgets.
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Node>,
    app_style_sheet: String,
}

impl WidgetTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            app_style_sheet: String::new(),
        }
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Insert a top-level widget.
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        self.nodes.insert(Node {
            widget: Some(widget),
            parent: None,
            children: Vec::new(),
        })
    }

    /// Insert a widget as a child of `parent`.
    ///
    /// If the parent does not exist the widget is inserted top-level and a
    /// warning is logged.
    pub fn insert_child(&mut self, parent: WidgetId, widget: Box<dyn Widget>) -> WidgetId {
        let id = self.insert(widget);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(id);
            self.nodes[id].parent = Some(parent);
        } else {
            tracing::warn!("insert_child: parent widget not found, inserting top-level");
        }
        id
    }

    /// Check whether a widget id is still alive.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get an immutable reference to a widget.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.nodes.get(id).and_then(|n| n.widget.as_deref())
    }

    /// Get a mutable reference to a widget.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).and_then(|n| n.widget.as_deref_mut())
    }

    /// Get a widget's parent id.
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Get a widget's direct children.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Collect every descendant of a widget, depth-first.
    pub fn descendants(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack: Vec<WidgetId> = self.children(id).to_vec();
        while let Some(next) = stack.pop() {
            out.push(next);
            if let Some(node) = self.nodes.get(next) {
                stack.extend(node.children.iter().copied());
            }
        }
        out
    }

    /// Remove a widget and its entire subtree.
    ///
    /// Every installed event filter is notified via
    /// [`EventFilter::widget_destroyed`](super::dispatcher::EventFilter::widget_destroyed)
    /// *after* the widget has left the tree, so an in-flight or queued event
    /// against the dead id resolves to `WidgetNotFound` instead of touching a
    /// destroyed widget. Removal is idempotent.
    pub fn remove(&mut self, id: WidgetId) {
        if !self.nodes.contains_key(id) {
            return;
        }

        // Unlink from the parent's child list
        if let Some(parent) = self.parent(id) {
            if let Some(parent_node) = self.nodes.get_mut(parent) {
                parent_node.children.retain(|&c| c != id);
            }
        }

        let mut doomed = self.descendants(id);
        doomed.push(id);

        for dead in doomed {
            if let Some(node) = self.nodes.remove(dead) {
                let filters = node
                    .widget
                    .as_ref()
                    .map(|w| w.widget_base().event_filters().to_vec())
                    .unwrap_or_default();
                drop(node);
                for filter in filters {
                    filter.borrow_mut().widget_destroyed(dead);
                }
            }
        }
    }

    /// Replace a widget with a wrapper built from it, preserving its id.
    ///
    /// Used by decorations to interpose on the paint path without touching
    /// the widget's own type.
    pub(crate) fn wrap_widget(
        &mut self,
        id: WidgetId,
        wrap: impl FnOnce(Box<dyn Widget>) -> Box<dyn Widget>,
    ) {
        if let Some(node) = self.nodes.get_mut(id) {
            if let Some(inner) = node.widget.take() {
                node.widget = Some(wrap(inner));
            }
        }
    }

    // =========================================================================
    // Style Text
    // =========================================================================

    /// Get the application-wide style text.
    pub fn app_style_sheet(&self) -> &str {
        &self.app_style_sheet
    }

    /// Set the application-wide style text.
    pub fn set_app_style_sheet(&mut self, sheet: impl Into<String>) {
        self.app_style_sheet = sheet.into();
    }

    /// Enable or disable mouse tracking on a widget.
    pub fn set_mouse_tracking(&mut self, id: WidgetId, enabled: bool) {
        if let Some(widget) = self.widget_mut(id) {
            widget.widget_base_mut().set_mouse_tracking(enabled);
        }
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Convert a window-coordinate point into a widget's local space.
    ///
    /// Accumulates the origins of the widget and all its ancestors.
    pub fn map_from_window(&self, id: WidgetId, window_point: Point) -> Point {
        let mut offset = Point::ZERO;
        let mut current = Some(id);

        while let Some(cur) = current {
            let Some(node) = self.nodes.get(cur) else { break };
            if let Some(widget) = node.widget.as_deref() {
                let origin = widget.geometry().origin;
                offset.x += origin.x;
                offset.y += origin.y;
            }
            current = node.parent;
        }

        Point::new(window_point.x - offset.x, window_point.y - offset.y)
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint a widget through the host's painter.
    ///
    /// Clears the widget's coalesced repaint request and runs its paint
    /// routine with a context carrying the application style text.
    ///
    /// Returns `false` if the widget does not exist.
    pub fn paint_widget(&mut self, id: WidgetId, painter: &mut dyn Painter) -> bool {
        let Self {
            nodes,
            app_style_sheet,
        } = self;

        let Some(node) = nodes.get_mut(id) else {
            return false;
        };
        let Some(widget) = node.widget.as_deref_mut() else {
            return false;
        };

        widget.widget_base_mut().clear_repaint_flag();
        let rect = widget.rect();
        let mut ctx = PaintContext::new(painter, rect).with_app_style_sheet(app_style_sheet.as_str());
        widget.paint(&mut ctx);
        true
    }

    // =========================================================================
    // Pointer Routing
    // =========================================================================

    /// Route a mouse move to a widget.
    ///
    /// Move events without a held button are dropped unless the target has
    /// mouse tracking enabled, matching toolkit delivery rules.
    pub fn route_mouse_move(
        &mut self,
        target: WidgetId,
        window_pos: Point,
        buttons: u8,
        modifiers: KeyboardModifiers,
    ) -> DispatchResult {
        let Some(widget) = self.widget(target) else {
            return DispatchResult::WidgetNotFound;
        };
        if buttons == 0 && !widget.widget_base().has_mouse_tracking() {
            return DispatchResult::Ignored;
        }

        let local = self.map_from_window(target, window_pos);
        let mut event =
            WidgetEvent::MouseMove(MouseMoveEvent::new(local, window_pos, buttons, modifiers));
        EventDispatcher::send_event(self, target, &mut event)
    }

    /// Route a mouse press to a widget.
    pub fn route_mouse_press(
        &mut self,
        target: WidgetId,
        window_pos: Point,
        button: MouseButton,
        modifiers: KeyboardModifiers,
    ) -> DispatchResult {
        if !self.contains(target) {
            return DispatchResult::WidgetNotFound;
        }
        let local = self.map_from_window(target, window_pos);
        let mut event =
            WidgetEvent::MousePress(MousePressEvent::new(button, local, window_pos, modifiers));
        EventDispatcher::send_event(self, target, &mut event)
    }

    /// Route a mouse release to a widget.
    pub fn route_mouse_release(
        &mut self,
        target: WidgetId,
        window_pos: Point,
        button: MouseButton,
        modifiers: KeyboardModifiers,
    ) -> DispatchResult {
        if !self.contains(target) {
            return DispatchResult::WidgetNotFound;
        }
        let local = self.map_from_window(target, window_pos);
        let mut event =
            WidgetEvent::MouseRelease(MouseReleaseEvent::new(button, local, window_pos, modifiers));
        EventDispatcher::send_event(self, target, &mut event)
    }

    /// Route a pointer-enter transition to a widget.
    pub fn route_enter(&mut self, target: WidgetId, window_pos: Point) -> DispatchResult {
        if !self.contains(target) {
            return DispatchResult::WidgetNotFound;
        }
        let local = self.map_from_window(target, window_pos);
        let mut event = WidgetEvent::Enter(EnterEvent::new(local, window_pos));
        EventDispatcher::send_event(self, target, &mut event)
    }

    /// Route a pointer-leave transition to a widget.
    pub fn route_leave(&mut self, target: WidgetId) -> DispatchResult {
        if !self.contains(target) {
            return DispatchResult::WidgetNotFound;
        }
        let mut event = WidgetEvent::Leave(LeaveEvent::new());
        EventDispatcher::send_event(self, target, &mut event)
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use lumina_render::Rect;

    use super::super::base::WidgetBase;
    use super::super::dispatcher::{EventFilter, FilterHandle};
    use super::*;

    struct Plain {
        base: WidgetBase,
        accept_moves: bool,
    }

    impl Plain {
        fn boxed(rect: Rect) -> Box<dyn Widget> {
            let mut base = WidgetBase::new();
            base.set_geometry(rect);
            Box::new(Self {
                base,
                accept_moves: false,
            })
        }

        fn boxed_accepting_moves(rect: Rect) -> Box<dyn Widget> {
            let mut base = WidgetBase::new();
            base.set_geometry(rect);
            Box::new(Self {
                base,
                accept_moves: true,
            })
        }
    }

    impl Widget for Plain {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }
        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }
        fn paint(&self, _ctx: &mut PaintContext<'_>) {}
        fn event(&mut self, event: &mut WidgetEvent) -> bool {
            if self.accept_moves && matches!(event, WidgetEvent::MouseMove(_)) {
                event.accept();
                return true;
            }
            false
        }
    }

    struct DeathWatch {
        seen: Vec<WidgetId>,
    }

    impl EventFilter for DeathWatch {
        fn event_filter(
            &mut self,
            _tree: &mut WidgetTree,
            _target: WidgetId,
            _event: &mut WidgetEvent,
        ) -> bool {
            false
        }

        fn widget_destroyed(&mut self, id: WidgetId) {
            self.seen.push(id);
        }
    }

    #[test]
    fn test_insert_and_links() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Plain::boxed(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let child = tree.insert_child(root, Plain::boxed(Rect::new(10.0, 10.0, 50.0, 50.0)));

        assert_eq!(tree.parent(child), Some(root));
        assert_eq!(tree.children(root), &[child]);
        assert_eq!(tree.descendants(root), vec![child]);
    }

    #[test]
    fn test_map_from_window() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Plain::boxed(Rect::new(100.0, 100.0, 200.0, 200.0)));
        let child = tree.insert_child(root, Plain::boxed(Rect::new(20.0, 30.0, 50.0, 50.0)));

        let local = tree.map_from_window(child, Point::new(125.0, 140.0));
        assert_eq!(local, Point::new(5.0, 10.0));
    }

    #[test]
    fn test_remove_notifies_filters_and_forgets_widget() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Plain::boxed(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let child = tree.insert_child(root, Plain::boxed(Rect::new(0.0, 0.0, 10.0, 10.0)));

        let watch = Rc::new(RefCell::new(DeathWatch { seen: Vec::new() }));
        let handle: FilterHandle = watch.clone();
        tree.widget_mut(root)
            .unwrap()
            .widget_base_mut()
            .install_event_filter(handle.clone());
        tree.widget_mut(child)
            .unwrap()
            .widget_base_mut()
            .install_event_filter(handle);

        tree.remove(root);

        assert!(!tree.contains(root));
        assert!(!tree.contains(child));
        let watch = watch.borrow();
        assert!(watch.seen.contains(&root));
        assert!(watch.seen.contains(&child));
        drop(watch);

        // Removing again is a no-op
        tree.remove(root);
    }

    #[test]
    fn test_move_requires_tracking() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Plain::boxed_accepting_moves(Rect::new(0.0, 0.0, 100.0, 100.0)));

        // Without tracking the move never reaches the widget
        let result = tree.route_mouse_move(root, Point::new(5.0, 5.0), 0, KeyboardModifiers::NONE);
        assert_eq!(result, DispatchResult::Ignored);

        tree.set_mouse_tracking(root, true);
        let result = tree.route_mouse_move(root, Point::new(5.0, 5.0), 0, KeyboardModifiers::NONE);
        assert_eq!(result, DispatchResult::Accepted);

        // A drag (button held) is delivered even without tracking
        tree.set_mouse_tracking(root, false);
        let result = tree.route_mouse_move(
            root,
            Point::new(5.0, 5.0),
            MouseButton::Left.mask(),
            KeyboardModifiers::NONE,
        );
        assert_eq!(result, DispatchResult::Accepted);
    }
}
