use anyhow::{anyhow, Result};
use image::DynamicImage;
use viuer::{print, Config as ViuerConfig};
use crate::config::RunConfig;
use crate::field::IntensityField;
use crate::render::field_to_gray_image;
use std::io::{IsTerminal, Write};

/// One-line summary of a converted field
#[must_use]
pub fn field_summary(field: &IntensityField, inverted: bool) -> String {
    let (height, width) = field.dim();
    let mut line = format!("{width}x{height} {}", field.output_type());

    match field.stats() {
        Some(stats) => line.push_str(&format!(", {stats}")),
        None => line.push_str(", empty"),
    }

    if inverted {
        line.push_str(", inverted");
    }

    line
}

pub fn print_field(field: &IntensityField, config: &RunConfig) -> Result<()> {
    let is_tty = std::io::stdout().is_terminal();

    let (config_width, config_height) = match (config.width, config.height) {
        (Some(w), ..) => (Some(w), None),
        (None, Some(h)) => (None, Some(h)),
        (None, None) => (Some(24), None),
    };

    let viuer_config = ViuerConfig {
        width: config_width,
        height: config_height,
        absolute_offset: false,
        use_kitty: is_tty,
        use_iterm: is_tty,
        use_sixel: is_tty,
        ..Default::default()
    };

    let image = DynamicImage::ImageLuma8(field_to_gray_image(field)?);

    std::io::stdout().flush()
        .map_err(|e| anyhow!("Failed to flush stdout: {e}"))?;

    print(&image, &viuer_config)
        .map_err(|e| anyhow!("Failed to display image: {e}"))?;

    Ok(())
}
