//! PNG output for a finished strip.

use crate::error::ExportError;
use crate::Tile;
use std::io::Write;

/// Encode `image` as an 8-bit RGBA PNG into `writer`.
pub fn write_png<W: Write>(image: &Tile, writer: W) -> Result<(), ExportError> {
    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}
