//! Hover gradient decoration: interaction tracking and attachment.
//!
//! [`enable_hover_gradient`] injects a radial hover glow into any widget in a
//! [`WidgetTree`] without touching the widget's type. Attachment installs a
//! shared event filter on the widget and every current descendant (so hover
//! transitions stay visible even when covering children handle the pointer),
//! and wraps the widget's paint path with the overlay composer.
//!
//! Children added after attachment are not covered retroactively; that is a
//! known limitation of one-shot propagation install, not something callers
//! should rely on being fixed.

use std::cell::RefCell;
use std::rc::Rc;

use lumina_render::{Color, Point};

use crate::widget::{EventFilter, FilterHandle, WidgetEvent, WidgetId, WidgetTree};

use super::overlay::HoverOverlay;

/// Per-widget interaction state for the hover glow.
///
/// One instance per decorated widget, created at attachment and shared
/// between the event filter and the paint overlay.
#[derive(Debug)]
pub(crate) struct HoverState {
    /// Whether the pointer is currently inside the decorated widget.
    pub(crate) hovering: bool,
    /// Whether a mouse button is currently held.
    pub(crate) pressed: bool,
    /// Last known pointer position in the decorated widget's local space;
    /// `None` means the pointer never entered.
    pub(crate) pointer: Option<Point>,
    /// Gradient stops: accent center, optional edge.
    pub(crate) stops: Vec<Color>,
    /// Alpha ceiling on the 0–255 scale, fixed at attachment.
    pub(crate) opacity: f32,
    /// Corner radius in pixels, memoized at first paint.
    pub(crate) cached_radius: Option<u32>,
}

impl HoverState {
    fn new(colors: AccentColors, opacity: f32) -> Self {
        Self {
            hovering: false,
            pressed: false,
            pointer: None,
            stops: colors.stops,
            opacity: 255.0 * opacity.clamp(0.0, 1.0),
            cached_radius: None,
        }
    }
}

/// Accent colors for the hover gradient.
///
/// One color means accent fading to transparent; two mean accent fading to
/// an explicit edge color.
#[derive(Debug, Clone)]
pub struct AccentColors {
    stops: Vec<Color>,
}

impl AccentColors {
    /// Accent fading to transparent.
    pub fn single(accent: Color) -> Self {
        Self {
            stops: vec![accent],
        }
    }

    /// Accent fading to an explicit edge color.
    pub fn with_edge(accent: Color, edge: Color) -> Self {
        Self {
            stops: vec![accent, edge],
        }
    }

    fn parse(value: &str) -> Color {
        Color::from_hex(value).unwrap_or_else(|| {
            tracing::warn!("unparseable accent color '{}', using white", value);
            Color::WHITE
        })
    }
}

impl Default for AccentColors {
    fn default() -> Self {
        Self::single(Color::WHITE)
    }
}

impl From<Color> for AccentColors {
    fn from(accent: Color) -> Self {
        Self::single(accent)
    }
}

impl From<(Color, Color)> for AccentColors {
    fn from((accent, edge): (Color, Color)) -> Self {
        Self::with_edge(accent, edge)
    }
}

impl From<&str> for AccentColors {
    fn from(accent: &str) -> Self {
        Self::single(Self::parse(accent))
    }
}

impl From<(&str, &str)> for AccentColors {
    fn from((accent, edge): (&str, &str)) -> Self {
        Self::with_edge(Self::parse(accent), Self::parse(edge))
    }
}

/// The shared event filter driving a widget's hover glow.
///
/// Installed on the decorated widget and all its descendants; every observed
/// event mutates the *root's* state, located through the back-reference. The
/// filter only observes — it never consumes events.
pub(crate) struct HoverGradientFilter {
    /// The decorated widget; cleared when it is destroyed.
    root: Option<WidgetId>,
    state: Rc<RefCell<HoverState>>,
}

impl HoverGradientFilter {
    fn new(root: WidgetId, state: Rc<RefCell<HoverState>>) -> Self {
        Self {
            root: Some(root),
            state,
        }
    }

    fn request_repaint(tree: &mut WidgetTree, root: WidgetId) {
        if let Some(widget) = tree.widget_mut(root) {
            widget.widget_base_mut().update();
        }
    }
}

impl EventFilter for HoverGradientFilter {
    fn event_filter(
        &mut self,
        tree: &mut WidgetTree,
        _target: WidgetId,
        event: &mut WidgetEvent,
    ) -> bool {
        // Torn-down back-reference: the decorated widget is gone and any
        // still-queued event must be a no-op.
        let Some(root) = self.root else {
            return false;
        };
        if !tree.contains(root) {
            return false;
        }

        let repaint = match event {
            WidgetEvent::MouseMove(e) => {
                let local = tree.map_from_window(root, e.window_pos);
                let inside = tree
                    .widget(root)
                    .is_some_and(|w| w.widget_base().contains_point(local));

                let mut state = self.state.borrow_mut();
                if inside {
                    state.hovering = true;
                    if state.pointer != Some(local) {
                        state.pointer = Some(local);
                        true
                    } else {
                        false
                    }
                } else if state.hovering {
                    state.hovering = false;
                    true
                } else {
                    false
                }
            }
            WidgetEvent::Enter(e) => {
                let local = tree.map_from_window(root, e.window_pos);
                let mut state = self.state.borrow_mut();
                state.hovering = true;
                state.pointer = Some(local);
                true
            }
            WidgetEvent::Leave(_) => {
                self.state.borrow_mut().hovering = false;
                true
            }
            WidgetEvent::MousePress(_) => {
                self.state.borrow_mut().pressed = true;
                true
            }
            WidgetEvent::MouseRelease(_) => {
                self.state.borrow_mut().pressed = false;
                true
            }
        };

        if repaint {
            Self::request_repaint(tree, root);
        }

        false
    }

    fn widget_destroyed(&mut self, id: WidgetId) {
        if self.root == Some(id) {
            self.root = None;
        }
    }
}

/// Inject a radial hover gradient into any widget.
///
/// Attachment is idempotent: a widget that already carries the decoration is
/// left untouched. On first attachment this
///
/// - records the accent stops and the precomputed alpha ceiling
///   (`255 * clamp(opacity, 0, 1)`),
/// - enables mouse tracking on the widget and every current descendant and
///   installs one shared event filter on all of them, so pointer events
///   handled by covering children still drive the widget's hover state,
/// - wraps the widget's paint routine so the glow composes on top of its
///   unchanged output.
///
/// # Arguments
///
/// * `colors` - One color (accent → transparent) or two (accent → edge).
/// * `opacity` - Opacity multiplier in the range `[0, 1]`.
pub fn enable_hover_gradient(
    tree: &mut WidgetTree,
    id: WidgetId,
    colors: impl Into<AccentColors>,
    opacity: f32,
) {
    let Some(widget) = tree.widget(id) else {
        tracing::warn!("enable_hover_gradient: widget not found");
        return;
    };
    if widget.widget_base().is_decorated() {
        return;
    }

    let state = Rc::new(RefCell::new(HoverState::new(colors.into(), opacity)));
    let filter: FilterHandle = Rc::new(RefCell::new(HoverGradientFilter::new(
        id,
        Rc::clone(&state),
    )));

    // One-shot propagation install over the current subtree
    let mut watched = vec![id];
    watched.extend(tree.descendants(id));
    for target in watched {
        tree.set_mouse_tracking(target, true);
        if let Some(w) = tree.widget_mut(target) {
            w.widget_base_mut().install_event_filter(Rc::clone(&filter));
        }
    }

    if let Some(w) = tree.widget_mut(id) {
        w.widget_base_mut().mark_decorated();
    }
    tree.wrap_widget(id, move |inner| Box::new(HoverOverlay::new(inner, state)));

    tracing::debug!("hover gradient attached");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_colors_broadcast() {
        let single: AccentColors = "#ff0000".into();
        assert_eq!(single.stops.len(), 1);
        assert_eq!(single.stops[0], Color::RED);

        let pair: AccentColors = ("#ff0000", "#0000ff").into();
        assert_eq!(pair.stops.len(), 2);
        assert_eq!(pair.stops[1], Color::BLUE);
    }

    #[test]
    fn test_accent_colors_bad_hex_falls_back_to_white() {
        let colors: AccentColors = "#not-a-color".into();
        assert_eq!(colors.stops[0], Color::WHITE);
    }

    #[test]
    fn test_state_opacity_clamped() {
        assert_eq!(HoverState::new(AccentColors::default(), 1.5).opacity, 255.0);
        assert_eq!(HoverState::new(AccentColors::default(), -0.5).opacity, 0.0);
        assert_eq!(HoverState::new(AccentColors::default(), 0.5).opacity, 127.5);
    }

    #[test]
    fn test_state_starts_unhovered() {
        let state = HoverState::new(AccentColors::default(), 1.0);
        assert!(!state.hovering);
        assert!(!state.pressed);
        assert!(state.pointer.is_none());
        assert!(state.cached_radius.is_none());
    }
}
