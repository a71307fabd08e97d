//! Rendering: SVG mask documents and optional rasterization.
//!
//! The geometry core is total and cannot fail; rasterization is the one
//! fallible boundary in the crate.

pub mod raster;
pub mod svg;

pub use raster::{rasterize, RenderError};
