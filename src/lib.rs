//! randomart - Procedural images from random expression trees
//!
//! A tree of colour transforms is evaluated at every point of the plane to
//! produce an image. The core is [`TransformNode`]: `apply` evaluates a tree
//! at a coordinate and `inspect` describes a single node. Around it sit a
//! seeded tree [`Generator`], a [`Canvas`] rasterizer and PNG/slab writers.

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod render;
pub mod types;

pub use config::{ArtConfig, OutputFormat};
pub use error::{ArtError, Result};
pub use generate::Generator;
pub use render::{
    pack_rgb, save_slab, to_image, write_meta_json, write_png, write_slab, Canvas, RenderMeta,
    RenderedArt,
};
pub use types::{Colour, Inspection, NodeKind, TransformNode};
