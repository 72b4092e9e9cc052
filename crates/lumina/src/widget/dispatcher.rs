//! Event dispatching and propagation for widgets.
//!
//! When an event is sent to a widget, the following steps occur:
//!
//! 1. **Event Filters**: All event filters installed on the widget are
//!    invoked in reverse order (most recently installed first). If any filter
//!    returns `true`, the event is consumed and processing stops.
//!
//! 2. **Widget Handler**: If no filter consumed the event, the widget's
//!    `event()` method is called.
//!
//! 3. **Propagation**: If the widget didn't accept the event and the event
//!    type supports propagation, the event is sent to the parent widget.
//!    This continues up the tree until a widget accepts the event or the
//!    root is reached.
//!
//! Filters are shared `Rc<RefCell<_>>` handles so a single filter object can
//! watch many widgets at once; that is what lets a decoration installed on a
//! parent observe events delivered to covering children.

use std::cell::RefCell;
use std::rc::Rc;

use super::events::WidgetEvent;
use super::tree::{WidgetId, WidgetTree};

/// A shared handle to an installed event filter.
pub type FilterHandle = Rc<RefCell<dyn EventFilter>>;

/// An object that can observe (and optionally consume) events delivered to
/// other widgets.
///
/// Filters receive the tree so they can query geometry and request repaints;
/// they must not re-enter event dispatch.
pub trait EventFilter {
    /// Filter an event destined for `target`.
    ///
    /// Return `true` to consume the event before it reaches the target
    /// widget, `false` to let it through.
    fn event_filter(
        &mut self,
        tree: &mut WidgetTree,
        target: WidgetId,
        event: &mut WidgetEvent,
    ) -> bool;

    /// Called when a widget carrying this filter is destroyed.
    ///
    /// Filters holding a back-reference to a widget must clear it here;
    /// events observed after this call for that widget must be no-ops.
    fn widget_destroyed(&mut self, _id: WidgetId) {}
}

/// Result of dispatching an event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was accepted/handled.
    Accepted,
    /// The event was not handled by any widget.
    Ignored,
    /// The event was consumed by an event filter.
    Filtered,
    /// The target widget was not found.
    WidgetNotFound,
}

impl DispatchResult {
    /// Check if the event was handled (accepted or filtered).
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted | Self::Filtered)
    }
}

/// Event dispatcher for the widget system.
///
/// Provides methods for dispatching events to widgets with proper
/// event filter handling and parent propagation.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Send an event to a widget, invoking event filters and handling
    /// propagation.
    pub fn send_event(
        tree: &mut WidgetTree,
        target_id: WidgetId,
        event: &mut WidgetEvent,
    ) -> DispatchResult {
        // Snapshot the target's filters and parent without holding a borrow
        let (filters, parent_id) = {
            let Some(widget) = tree.widget(target_id) else {
                return DispatchResult::WidgetNotFound;
            };
            (
                widget.widget_base().event_filters().to_vec(),
                tree.parent(target_id),
            )
        };

        // Step 1: Invoke event filters (in reverse order - most recent first)
        for filter in filters.iter().rev() {
            if filter.borrow_mut().event_filter(tree, target_id, event) {
                return DispatchResult::Filtered;
            }
        }

        // Step 2: Send to the target widget
        let handled = {
            let Some(widget) = tree.widget_mut(target_id) else {
                return DispatchResult::WidgetNotFound;
            };
            widget.event(event)
        };

        if handled || event.is_accepted() {
            return DispatchResult::Accepted;
        }

        // Step 3: Propagate to parent if the event supports it
        if event.should_propagate() {
            if let Some(parent_id) = parent_id {
                return Self::send_event(tree, parent_id, event);
            }
        }

        DispatchResult::Ignored
    }
}
