//! Canvas rasterizer - samples a tree over a square pixel grid.
//!
//! Pixel indices are mapped onto the `[-1, 1] x [-1, 1]` domain by taking
//! the centre of each pixel, and the resulting colours are quantized to
//! 8 bits per channel.

use crate::error::{ArtError, Result};
use crate::types::{Colour, TransformNode};

/// A rendered image - a square grid of 8-bit RGB pixels.
#[derive(Debug, Clone)]
pub struct RenderedArt {
    /// Image name, used for output file names.
    pub name: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<[u8; 3]>>,

    /// Side length in pixels.
    size: usize,
}

impl RenderedArt {
    /// Create a rendered image from a square pixel grid.
    pub fn new(name: impl Into<String>, pixels: Vec<Vec<[u8; 3]>>) -> Self {
        let size = pixels.len();
        Self {
            name: name.into(),
            pixels,
            size,
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<[u8; 3]>] {
        &self.pixels
    }
}

/// Samples transform trees onto a square grid.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    size: usize,
}

impl Canvas {
    /// Create a canvas with the given side length.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(ArtError::Render {
                message: "Canvas size must be at least 1 pixel".to_string(),
                help: Some("Pass --size with a positive value".to_string()),
            });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Map a pixel index to the centre of its cell in `[-1, 1]`.
    pub fn sample_point(&self, index: usize) -> f64 {
        2.0 * (index as f64 + 0.5) / self.size as f64 - 1.0
    }

    /// Evaluate `node` at the centre of pixel `(px, py)`.
    pub fn sample(&self, node: &TransformNode, px: usize, py: usize) -> Colour {
        node.apply(self.sample_point(px), self.sample_point(py))
    }

    /// Render `node` into an image.
    pub fn render(&self, node: &TransformNode, name: impl Into<String>) -> RenderedArt {
        let pixels = (0..self.size)
            .map(|py| {
                (0..self.size)
                    .map(|px| self.sample(node, px, py).to_rgb8())
                    .collect()
            })
            .collect();
        RenderedArt::new(name, pixels)
    }
}
