//! Raw "memory slab" output.
//!
//! Layout, all big-endian `u32`:
//! - width
//! - height
//! - one packed `0x00RRGGBB` word per pixel, column-major (x outer, y inner)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ArtError, Result};

use super::RenderedArt;

/// Pack an RGB triple into `0x00RRGGBB`.
pub fn pack_rgb(px: [u8; 3]) -> u32 {
    (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32
}

/// Write rendered art in slab format.
pub fn write_slab<W: Write>(rendered: &RenderedArt, out: &mut W) -> Result<()> {
    let side = rendered.size() as u32;
    out.write_all(&side.to_be_bytes())?;
    out.write_all(&side.to_be_bytes())?;

    for x in 0..rendered.size() {
        for y in 0..rendered.size() {
            let word = rendered.get(x, y).map_or(0, pack_rgb);
            out.write_all(&word.to_be_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write rendered art to a slab file at `path`.
pub fn save_slab(rendered: &RenderedArt, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create slab file: {}", e),
    })?;
    write_slab(rendered, &mut BufWriter::new(file))
}
