//! Style-text queries and palette surface for Lumina.
//!
//! This crate is the seam between the rendering core and the host's theming
//! machinery. The core never parses themes or builds palettes; it consumes
//! two queryable facts supplied here:
//!
//! - **Border radius**: [`border_radius`] scans widget-local and
//!   application-wide style text for the corner radius that applies to a
//!   widget's rendered box (last declaration wins).
//! - **Palette**: [`Palette`] exposes the host's normal and disabled text
//!   colors, read-only.

mod error;
mod palette;
mod radius;

pub use error::{Error, Result};
pub use palette::Palette;
pub use radius::border_radius;
