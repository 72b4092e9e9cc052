//! The vector icon engine.
//!
//! Named icons come from two process-lifetime catalogs (outline and filled
//! variants), get colored through a palette-aware resolution policy, and
//! rasterize into exact-size snapshots — or into reusable [`Icon`] handles
//! that re-resolve their color for every paint mode.
//!
//! Lookup failures surface as [`IconError::UnknownIcon`]; coloring failures
//! degrade silently instead. A wrong icon is a worse silent failure than a
//! wrong color.

mod catalog;
mod color;
mod engine;

use thiserror::Error;

use lumina_render::RenderError;

pub use color::{ColorSpec, IconMode, resolve_color};
pub use engine::{DEFAULT_ICON_SIZE, Icon, IconRequest, render_icon};

/// Errors produced by the icon engine.
#[derive(Debug, Error)]
pub enum IconError {
    /// The requested name is absent from the catalog table consulted.
    #[error("unknown icon '{name}'")]
    UnknownIcon { name: String },

    /// Rasterization failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for icon operations.
pub type IconResult<T> = Result<T, IconError>;
