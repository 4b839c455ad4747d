//! Layout calculation modules for booklet imposition
//!
//! This module handles everything that can be computed without PDF objects:
//! - Page ordering (which source pages share a sheet side)
//! - Sheet geometry (scale, translation and clip region of each half)

mod geometry;
mod plan;
mod types;

pub use geometry::*;
pub use plan::*;
pub use types::*;
