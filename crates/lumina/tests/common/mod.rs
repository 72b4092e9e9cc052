//! Shared test doubles: a recording painter and a minimal host widget.

#![allow(dead_code)]

use lumina::prelude::*;
use lumina::render::{Paint, RadialGradient};
use lumina::widget::PaintContext;

/// One recorded draw command.
#[derive(Debug, Clone)]
pub enum PaintCommand {
    FillRect { rect: Rect, color: Color },
    FillPath { path: Path, paint: Paint },
}

/// A painter that records every fill instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded radial-gradient fills, in draw order.
    pub fn radial_fills(&self) -> Vec<(&Path, &RadialGradient)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::FillPath { path, paint } => {
                    paint.as_radial().map(|gradient| (path, gradient))
                }
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(PaintCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }
}

/// A minimal host widget: fills its rect with one color and optionally
/// consumes press/release events (like a button would).
pub struct TestWidget {
    base: WidgetBase,
    fill: Color,
    accept_presses: bool,
}

impl TestWidget {
    pub fn boxed(rect: Rect) -> Box<dyn Widget> {
        Self::build(rect, Color::from_rgb8(0x30, 0x30, 0x30), false)
    }

    /// A widget that consumes press/release, the way an interactive child
    /// stops those events from reaching its parent.
    pub fn boxed_pressable(rect: Rect) -> Box<dyn Widget> {
        Self::build(rect, Color::from_rgb8(0x30, 0x30, 0x30), true)
    }

    fn build(rect: Rect, fill: Color, accept_presses: bool) -> Box<dyn Widget> {
        let mut base = WidgetBase::new();
        base.set_geometry(rect);
        Box::new(Self {
            base,
            fill,
            accept_presses,
        })
    }
}

impl Widget for TestWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        ctx.painter().fill_rect(rect, self.fill);
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if self.accept_presses
            && matches!(
                event,
                WidgetEvent::MousePress(_) | WidgetEvent::MouseRelease(_)
            )
        {
            event.accept();
            return true;
        }
        false
    }
}
