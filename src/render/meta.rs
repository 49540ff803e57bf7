//! JSON sidecar describing how an image was produced.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ArtError, Result};

/// Metadata written next to a rendered image.
#[derive(Debug, Clone, Serialize)]
pub struct RenderMeta {
    pub index: u64,
    pub seed: u64,
    pub complexity: usize,
    pub size: usize,
    pub scale: u32,
    pub nodes: usize,
    pub depth: usize,
    pub expression: String,
    pub render_ms: u128,
}

/// Write render metadata as pretty-printed JSON.
pub fn write_meta_json(meta: &RenderMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| ArtError::Render {
        message: format!("Failed to serialize render metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write render metadata: {}", e),
    })?;
    Ok(())
}
