//! Rendering module for randomart.
//!
//! This module samples transform trees onto pixel grids and writes the
//! results out as PNG or raw slab files.

mod canvas;
mod meta;
mod png;
mod slab;

pub use canvas::{Canvas, RenderedArt};
pub use meta::{write_meta_json, RenderMeta};
pub use png::{to_image, write_png};
pub use slab::{pack_rgb, save_slab, write_slab};
