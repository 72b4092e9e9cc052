//! Paint interception and gradient composition for the hover glow.
//!
//! [`HoverOverlay`] wraps a widget's existing paint routine: the original
//! output is preserved exactly, then the radial glow is composed on top.
//! The wrapper implements [`Widget`] by delegation, so from the tree's point
//! of view the decorated widget keeps its id, geometry, and event handling.

use std::cell::RefCell;
use std::rc::Rc;

use lumina_render::{
    Color, CornerRadii, GradientStop, Paint, Painter, Path, Rect,
};
use lumina_style::border_radius;

use crate::widget::{PaintContext, Widget, WidgetBase, WidgetEvent};

use super::hover::HoverState;

/// Gradient radius multiplier while a button is held: the glow contracts so
/// presses read as heavier.
const PRESSED_RADIUS_FACTOR: f32 = 0.6;

/// Gradient radius multiplier while hovering unpressed.
const HOVER_RADIUS_FACTOR: f32 = 0.9;

/// Center-alpha multiplier while hovering unpressed; a press raises the
/// center to the full configured opacity.
const HOVER_ALPHA_FACTOR: f32 = 0.6;

/// Wrapper that runs a widget's own paint routine, then draws the glow.
pub(crate) struct HoverOverlay {
    inner: Box<dyn Widget>,
    state: Rc<RefCell<HoverState>>,
}

impl HoverOverlay {
    pub(crate) fn new(inner: Box<dyn Widget>, state: Rc<RefCell<HoverState>>) -> Self {
        Self { inner, state }
    }
}

impl Widget for HoverOverlay {
    fn widget_base(&self) -> &WidgetBase {
        self.inner.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.inner.widget_base_mut()
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        self.inner.paint(ctx);

        let rect = ctx.rect();
        let app_sheet = ctx.app_style_sheet();
        let widget_sheet = self.inner.widget_base().style_sheet();
        compose_overlay(&self.state, rect, widget_sheet, app_sheet, ctx.painter());
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        self.inner.event(event)
    }
}

/// Compose the hover glow over a widget's finished paint output.
///
/// The corner radius is resolved from the widget's own style text (falling
/// back to the application sheet) on the first paint and memoized; the clip
/// is inset by one pixel on the trailing edges to keep antialiasing off the
/// exact boundary.
fn compose_overlay(
    state: &RefCell<HoverState>,
    rect: Rect,
    widget_sheet: &str,
    app_sheet: &str,
    painter: &mut dyn Painter,
) {
    let radius = {
        let mut state = state.borrow_mut();
        match state.cached_radius {
            Some(radius) => radius,
            None => {
                let radius = border_radius([widget_sheet, app_sheet]);
                state.cached_radius = Some(radius);
                radius
            }
        }
    };

    let clip = rect.adjusted(0.0, 0.0, -1.0, -1.0);
    let path = if radius > 0 {
        Path::rounded_rect(clip, CornerRadii::uniform(radius as f32))
    } else {
        Path::rect(clip)
    };

    let state = state.borrow();
    let Some(pointer) = state.pointer else {
        return;
    };
    if !state.hovering {
        return;
    }

    let factor = if state.pressed {
        PRESSED_RADIUS_FACTOR
    } else {
        HOVER_RADIUS_FACTOR
    };
    let gradient_radius = rect.size.longest_side() * factor;

    let center_alpha = if state.pressed {
        state.opacity
    } else {
        state.opacity * HOVER_ALPHA_FACTOR
    };
    let center = state.stops[0].with_alpha(center_alpha / 255.0);
    let edge = state.stops.get(1).copied().unwrap_or(Color::TRANSPARENT);

    let stops = vec![
        GradientStop::new(0.0, center),
        GradientStop::new(1.0, edge),
    ];
    painter.fill_path(&path, &Paint::radial_gradient(pointer, gradient_radius, stops));
}
