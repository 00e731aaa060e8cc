//! Intensity field to 8-bit grayscale image
//!
//! Stretches the field's observed `[min, max]` onto `[0, 255]`. Uses f32 for
//! the per-pixel math, same as the viewer's grayscale path.

use anyhow::{Context, Result};
use image::{GrayImage, ImageBuffer};
use crate::field::IntensityField;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn field_to_gray_image(field: &IntensityField) -> Result<GrayImage> {
    let (height, width) = field.dim();
    let width = u32::try_from(width).context("Field too wide for an image")?;
    let height = u32::try_from(height).context("Field too tall for an image")?;

    let (min_val, range) = match field.stats() {
        Some(stats) if stats.range() > 0.0 => (stats.min as f32, stats.range() as f32),
        // Constant or empty field: everything maps to black
        Some(stats) => (stats.min as f32, 1.0_f32),
        None => (0.0_f32, 1.0_f32),
    };

    let gray_pixels: Vec<u8> = field
        .values()
        .map(|v| {
            let normalized = (v as f32 - min_val) / range;
            // Saturating cast guards against rounding past either end
            (normalized * 255.0_f32) as u8
        })
        .collect();

    let image: GrayImage = ImageBuffer::from_raw(width, height, gray_pixels)
        .context("Failed to create grayscale image buffer")?;

    Ok(image)
}
