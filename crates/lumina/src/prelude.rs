//! Prelude module with commonly used types.

pub use crate::decor::{AccentColors, enable_hover_gradient};
pub use crate::icon::{
    ColorSpec, Icon, IconError, IconMode, IconRequest, render_icon,
};
pub use crate::widget::{
    DispatchResult, EventFilter, KeyboardModifiers, MouseButton, PaintContext, Widget, WidgetBase,
    WidgetEvent, WidgetId, WidgetTree,
};

pub use lumina_render::{Color, Paint, Painter, Path, Point, RasterImage, Rect, Size};
pub use lumina_style::{Palette, border_radius};
