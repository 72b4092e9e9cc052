//! Runtime widget decorations.
//!
//! Decorations layer visual effects onto already-constructed widgets without
//! modifying or subclassing them: attachment installs interaction tracking
//! and wraps the paint path at runtime.

mod hover;
mod overlay;

pub use hover::{AccentColors, enable_hover_gradient};
