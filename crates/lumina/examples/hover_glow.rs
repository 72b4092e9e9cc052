//! Drives a decorated panel through a simulated pointer pass and prints the
//! gradient parameters the overlay produces at each stage.
//!
//! Run with: `cargo run -p lumina --example hover_glow`

use lumina::prelude::*;
use lumina::widget::PaintContext;

struct Panel {
    base: WidgetBase,
}

impl Panel {
    fn boxed(rect: Rect) -> Box<dyn Widget> {
        let mut base = WidgetBase::new();
        base.set_geometry(rect);
        Box::new(Self { base })
    }
}

impl Widget for Panel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        ctx.painter().fill_rect(rect, Color::from_rgb8(0x2b, 0x2b, 0x2b));
    }
}

/// A painter that narrates draw commands instead of rasterizing them.
struct ConsolePainter;

impl Painter for ConsolePainter {
    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        println!("  widget background {}x{}", rect.width(), rect.height());
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if let Paint::RadialGradient(gradient) = paint {
            println!(
                "  glow: center ({:.0}, {:.0})  radius {:.0}  alpha {:.2}  {}",
                gradient.center.x,
                gradient.center.y,
                gradient.radius,
                gradient.stops[0].color.a,
                if path.has_curves() { "rounded clip" } else { "square clip" },
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = WidgetTree::new();
    tree.set_app_style_sheet("Panel { border-radius: 8px; }");

    let panel = tree.insert(Panel::boxed(Rect::new(0.0, 0.0, 240.0, 64.0)));
    enable_hover_gradient(&mut tree, panel, "#8ab4f8", 0.8);

    let mut painter = ConsolePainter;

    println!("pointer enters:");
    tree.route_enter(panel, Point::new(40.0, 20.0));
    tree.paint_widget(panel, &mut painter);

    println!("pointer glides:");
    tree.route_mouse_move(panel, Point::new(140.0, 32.0), 0, KeyboardModifiers::NONE);
    tree.paint_widget(panel, &mut painter);

    println!("press:");
    tree.route_mouse_press(panel, Point::new(140.0, 32.0), MouseButton::Left, KeyboardModifiers::NONE);
    tree.paint_widget(panel, &mut painter);

    println!("release:");
    tree.route_mouse_release(panel, Point::new(140.0, 32.0), MouseButton::Left, KeyboardModifiers::NONE);
    tree.paint_widget(panel, &mut painter);

    println!("pointer leaves (no glow expected):");
    tree.route_leave(panel);
    tree.paint_widget(panel, &mut painter);
}
