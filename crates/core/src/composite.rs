//! Horizontal tiling of same-height images.

use crate::error::CompositeError;
use crate::Tile;
use image::imageops;

/// Place `images` left to right on one canvas.
///
/// Each image lands at the summed width of everything before it. Pixels are
/// copied as-is, including alpha.
pub fn composite(images: &[Tile]) -> Result<Tile, CompositeError> {
    let first = images.first().ok_or(CompositeError::NoImages)?;
    let height = first.height();

    let width = images
        .iter()
        .enumerate()
        .try_fold(0u32, |total, (index, img)| {
            if img.height() != height {
                return Err(CompositeError::HeightMismatch {
                    index,
                    expected: height,
                    actual: img.height(),
                });
            }
            total
                .checked_add(img.width())
                .ok_or(CompositeError::WidthOverflow)
        })?;

    let mut canvas = Tile::new(width, height);
    let mut x_offset = 0i64;
    for img in images {
        imageops::replace(&mut canvas, img, x_offset, 0);
        x_offset += i64::from(img.width());
    }
    Ok(canvas)
}
