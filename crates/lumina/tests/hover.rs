//! End-to-end tests for the hover gradient decoration: attachment,
//! interaction tracking through the event filter, and overlay composition.

mod common;

use common::{PaintCommand, RecordingPainter, TestWidget};

use lumina::prelude::*;

const NO_BUTTONS: u8 = 0;

fn decorated_tree() -> (WidgetTree, WidgetId) {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    (tree, root)
}

fn paint(tree: &mut WidgetTree, id: WidgetId) -> RecordingPainter {
    let mut painter = RecordingPainter::new();
    assert!(tree.paint_widget(id, &mut painter));
    painter
}

#[test]
fn test_attach_is_idempotent() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    let child = tree.insert_child(root, TestWidget::boxed(Rect::new(10.0, 10.0, 40.0, 40.0)));

    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    // Second attach with different parameters must be a silent no-op
    enable_hover_gradient(&mut tree, root, "#ff0000", 0.25);

    assert_eq!(tree.widget(root).unwrap().widget_base().event_filters().len(), 1);
    assert_eq!(tree.widget(child).unwrap().widget_base().event_filters().len(), 1);

    // Exactly one overlay: hovering produces exactly one gradient fill, with
    // the first attachment's colors
    tree.route_enter(root, Point::new(50.0, 40.0));
    let painter = paint(&mut tree, root);
    let fills = painter.radial_fills();
    assert_eq!(fills.len(), 1);
    let center_stop = fills[0].1.stops[0].color;
    assert_eq!((center_stop.r, center_stop.g, center_stop.b), (1.0, 1.0, 1.0));
    assert!((center_stop.a - 0.6).abs() < 1e-4);
}

#[test]
fn test_overlay_draws_on_top_of_widget_output() {
    let (mut tree, root) = decorated_tree();
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    assert!(matches!(painter.commands[0], PaintCommand::FillRect { .. }));
    assert!(matches!(
        painter.commands.last(),
        Some(PaintCommand::FillPath { .. })
    ));
}

#[test]
fn test_move_inside_renders_centered_at_pointer() {
    let (mut tree, root) = decorated_tree();

    let result = tree.route_mouse_move(root, Point::new(30.0, 40.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert!(!matches!(result, DispatchResult::WidgetNotFound));

    let painter = paint(&mut tree, root);
    let fills = painter.radial_fills();
    assert_eq!(fills.len(), 1);
    let gradient = fills[0].1;
    assert_eq!(gradient.center, Point::new(30.0, 40.0));
    // Unpressed hover radius: max(100, 80) * 0.9
    assert!((gradient.radius - 90.0).abs() < 1e-4);
}

#[test]
fn test_move_outside_renders_nothing() {
    let (mut tree, root) = decorated_tree();

    tree.route_mouse_move(root, Point::new(30.0, 40.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert_eq!(paint(&mut tree, root).radial_fills().len(), 1);

    // Pointer wanders outside the widget bounds
    tree.route_mouse_move(root, Point::new(150.0, 150.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert_eq!(paint(&mut tree, root).radial_fills().len(), 0);
}

#[test]
fn test_never_entered_renders_nothing() {
    let (mut tree, root) = decorated_tree();
    assert_eq!(paint(&mut tree, root).radial_fills().len(), 0);
}

#[test]
fn test_leave_clears_hover() {
    let (mut tree, root) = decorated_tree();
    tree.route_enter(root, Point::new(20.0, 20.0));
    assert_eq!(paint(&mut tree, root).radial_fills().len(), 1);

    tree.route_leave(root);
    assert_eq!(paint(&mut tree, root).radial_fills().len(), 0);
}

#[test]
fn test_press_tightens_and_brightens() {
    let (mut tree, root) = decorated_tree();
    tree.route_mouse_move(root, Point::new(50.0, 40.0), NO_BUTTONS, KeyboardModifiers::NONE);

    let hover = paint(&mut tree, root);
    let hover_fills = hover.radial_fills();
    let (hover_radius, hover_alpha) = (
        hover_fills[0].1.radius,
        hover_fills[0].1.stops[0].color.a,
    );
    assert!((hover_radius - 100.0 * 0.9).abs() < 1e-4);
    assert!((hover_alpha - 0.6).abs() < 1e-4);

    tree.route_mouse_press(root, Point::new(50.0, 40.0), MouseButton::Left, KeyboardModifiers::NONE);
    let pressed = paint(&mut tree, root);
    let pressed_fills = pressed.radial_fills();
    let (pressed_radius, pressed_alpha) = (
        pressed_fills[0].1.radius,
        pressed_fills[0].1.stops[0].color.a,
    );
    assert!((pressed_radius - 100.0 * 0.6).abs() < 1e-4);
    assert!((pressed_alpha - 1.0).abs() < 1e-4);

    tree.route_mouse_release(root, Point::new(50.0, 40.0), MouseButton::Left, KeyboardModifiers::NONE);
    let released = paint(&mut tree, root);
    assert!((released.radial_fills()[0].1.radius - 90.0).abs() < 1e-4);
}

#[test]
fn test_two_colors_set_explicit_edge() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    enable_hover_gradient(&mut tree, root, ("#ff0000", "#0000ff"), 1.0);
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    let gradient = painter.radial_fills()[0].1.clone();
    assert_eq!(gradient.stops[1].color, Color::BLUE);

    // Single color means a fully transparent edge
    let (mut tree, root) = decorated_tree();
    tree.route_enter(root, Point::new(10.0, 10.0));
    let painter = paint(&mut tree, root);
    assert_eq!(painter.radial_fills()[0].1.stops[1].color, Color::TRANSPARENT);
}

#[test]
fn test_corner_radius_resolved_from_widget_sheet_and_memoized() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    tree.widget_mut(root)
        .unwrap()
        .widget_base_mut()
        .set_style_sheet("TestWidget { border-radius: 6px; }");
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    assert!(painter.radial_fills()[0].0.has_curves());

    // Changing the style text after the first paint does not change the
    // rendered radius (memoization contract)
    tree.widget_mut(root)
        .unwrap()
        .widget_base_mut()
        .set_style_sheet("");
    let painter = paint(&mut tree, root);
    assert!(painter.radial_fills()[0].0.has_curves());
}

#[test]
fn test_corner_radius_falls_back_to_app_sheet() {
    let mut tree = WidgetTree::new();
    tree.set_app_style_sheet("* { border-radius: 8px; }");
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    assert!(painter.radial_fills()[0].0.has_curves());
}

#[test]
fn test_widget_sheet_overrides_app_sheet() {
    let mut tree = WidgetTree::new();
    tree.set_app_style_sheet("* { border-radius: 8px; }");
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    // The widget's own zero radius wins over the app-wide 8px
    tree.widget_mut(root)
        .unwrap()
        .widget_base_mut()
        .set_style_sheet("border-radius: 0");
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    assert!(!painter.radial_fills()[0].0.has_curves());
}

#[test]
fn test_clip_is_inset_on_trailing_edges() {
    let (mut tree, root) = decorated_tree();
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    let fills = painter.radial_fills();
    let path = fills[0].0;

    // The plain-rect clip spans (0,0)..(99,79): one pixel off the trailing edges
    let max_x = path
        .commands()
        .iter()
        .filter_map(|c| match c {
            lumina::render::PathCommand::MoveTo(p) | lumina::render::PathCommand::LineTo(p) => {
                Some(p.x)
            }
            _ => None,
        })
        .fold(f32::MIN, f32::max);
    assert_eq!(max_x, 99.0);
}

#[test]
fn test_events_on_covering_child_drive_parent_state() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    // The child covers part of the parent and consumes press/release itself
    let child = tree.insert_child(root, TestWidget::boxed_pressable(Rect::new(20.0, 20.0, 60.0, 40.0)));
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);

    // Move over the child: delivered to the child (tracking was propagated),
    // observed by the shared filter, mapped into the parent's space
    tree.route_mouse_move(child, Point::new(40.0, 30.0), NO_BUTTONS, KeyboardModifiers::NONE);
    let painter = paint(&mut tree, root);
    let fills = painter.radial_fills();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].1.center, Point::new(40.0, 30.0));

    // The child consumes the press, but the parent's glow still tightens
    let result = tree.route_mouse_press(child, Point::new(40.0, 30.0), MouseButton::Left, KeyboardModifiers::NONE);
    assert_eq!(result, DispatchResult::Accepted);
    assert!(result.was_handled());
    let painter = paint(&mut tree, root);
    assert!((painter.radial_fills()[0].1.radius - 100.0 * 0.6).abs() < 1e-4);
}

#[test]
fn test_repaint_requests_coalesce_and_skip_unchanged_pointer() {
    let (mut tree, root) = decorated_tree();

    tree.route_mouse_move(root, Point::new(30.0, 30.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert!(tree.widget(root).unwrap().widget_base().needs_repaint());

    // Painting clears the coalesced request
    paint(&mut tree, root);
    assert!(!tree.widget(root).unwrap().widget_base().needs_repaint());

    // The same position again requests nothing
    tree.route_mouse_move(root, Point::new(30.0, 30.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert!(!tree.widget(root).unwrap().widget_base().needs_repaint());

    // A different position does
    tree.route_mouse_move(root, Point::new(31.0, 30.0), NO_BUTTONS, KeyboardModifiers::NONE);
    assert!(tree.widget(root).unwrap().widget_base().needs_repaint());
}

#[test]
fn test_events_after_destruction_are_noops() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    let child = tree.insert_child(root, TestWidget::boxed(Rect::new(10.0, 10.0, 40.0, 40.0)));
    enable_hover_gradient(&mut tree, root, "#ffffff", 1.0);
    tree.route_enter(root, Point::new(10.0, 10.0));

    tree.remove(root);

    // A queued pointer event against the dead ids must neither panic nor
    // repaint a destroyed surface
    assert_eq!(
        tree.route_mouse_move(root, Point::new(5.0, 5.0), NO_BUTTONS, KeyboardModifiers::NONE),
        DispatchResult::WidgetNotFound
    );
    assert_eq!(
        tree.route_mouse_press(child, Point::new(5.0, 5.0), MouseButton::Left, KeyboardModifiers::NONE),
        DispatchResult::WidgetNotFound
    );

    let mut painter = RecordingPainter::new();
    assert!(!tree.paint_widget(root, &mut painter));
    assert!(painter.commands.is_empty());
}

#[test]
fn test_opacity_scales_center_alpha() {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TestWidget::boxed(Rect::new(0.0, 0.0, 100.0, 80.0)));
    enable_hover_gradient(&mut tree, root, "#ffffff", 0.5);
    tree.route_enter(root, Point::new(10.0, 10.0));

    let painter = paint(&mut tree, root);
    let alpha = painter.radial_fills()[0].1.stops[0].color.a;
    // 0.5 opacity, hover (not pressed): 0.5 * 0.6
    assert!((alpha - 0.3).abs() < 1e-3);
}
