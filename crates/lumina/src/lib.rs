//! Runtime widget decorations and a vector icon engine for retained-mode
//! GUIs.
//!
//! Lumina augments already-constructed widgets with non-intrusive visual
//! decorations — no subclassing, no changes to the widget's type:
//!
//! - **Hover glow** ([`decor::enable_hover_gradient`]): a stateful radial
//!   gradient that follows the pointer, tightens and brightens on press, and
//!   clips to the widget's styled corner radius.
//! - **Vector icons** ([`icon::IconRequest`], [`icon::render_icon`]): named
//!   icons from lazily-loaded catalogs, colored through a palette-aware
//!   policy, rotated and rasterized on demand, or kept as mode-reactive
//!   handles.
//!
//! The widget seam lives in [`widget`]; hosts implement
//! [`Widget`](widget::Widget) and the render crate's
//! [`Painter`](lumina_render::Painter) and get decorations for free.
//!
//! Everything here is single-threaded and event-loop-driven: state mutation,
//! event dispatch, and paint composition all run to completion on the UI
//! thread, and repaint requests coalesce until the next paint turn.

pub mod decor;
pub mod icon;
pub mod widget;

pub mod prelude;

pub use lumina_render as render;
pub use lumina_style as style;
