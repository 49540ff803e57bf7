//! PNG output for rendered art.
//!
//! Converts rendered images to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{ArtError, Result};

use super::RenderedArt;

/// Write rendered art to a PNG file.
///
/// # Arguments
///
/// * `rendered` - The rendered image to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(rendered: &RenderedArt, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(rendered, scale)?;

    img.save(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Build an RGB image buffer, upscaling each pixel to a `scale` x `scale` block.
///
/// Fails when the scaled side length does not fit in a `u32`.
pub fn to_image(rendered: &RenderedArt, scale: u32) -> Result<RgbImage> {
    let scale = scale.max(1); // Minimum scale of 1
    let side = u32::try_from(rendered.size())
        .ok()
        .and_then(|size| size.checked_mul(scale))
        .ok_or_else(|| ArtError::Render {
            message: format!(
                "Scaled image is too large: {} pixels x {}",
                rendered.size(),
                scale
            ),
            help: Some("Use a smaller --scale or --size".to_string()),
        })?;

    let mut img: RgbImage = ImageBuffer::new(side, side);

    for (y, row) in rendered.pixels().iter().enumerate() {
        for (x, px) in row.iter().enumerate() {
            let rgb = Rgb(*px);

            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x as u32 * scale + sx, y as u32 * scale + sy, rgb);
                }
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn checker() -> RenderedArt {
        RenderedArt::new(
            "test",
            vec![
                vec![[0, 0, 0], [255, 255, 255]],
                vec![[255, 0, 0], [0, 255, 0]],
            ],
        )
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&checker(), &path, 1).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0]);
    }

    #[test]
    fn test_write_png_scaled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&checker(), &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 4);
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(2, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(3, 3).0, [0, 255, 0]);
    }

    #[test]
    fn test_scale_zero_treated_as_one() {
        let img = to_image(&checker(), 0).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
    }

    #[test]
    fn test_scale_overflow_rejected() {
        let err = to_image(&checker(), u32::MAX / 2 + 1).unwrap_err();
        assert!(matches!(err, ArtError::Render { .. }));

        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");
        assert!(write_png(&checker(), &path, u32::MAX).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_png_bad_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = write_png(&checker(), &path, 1).unwrap_err();
        assert!(matches!(err, ArtError::Io { .. }));
    }
}
