//! Integer nearest-neighbor upscaling.

use crate::error::ScaleError;
use crate::Tile;
use image::ImageBuffer;

/// Upscale `image` by an integer `factor`.
///
/// Every source pixel becomes a `factor` x `factor` block of the same value.
pub fn scale(image: &Tile, factor: u32) -> Result<Tile, ScaleError> {
    if factor == 0 {
        return Err(ScaleError::ZeroFactor);
    }
    let (w, h) = image.dimensions();
    let (width, height) = match (w.checked_mul(factor), h.checked_mul(factor)) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            return Err(ScaleError::Overflow {
                width: w as u64 * factor as u64,
                height: h as u64 * factor as u64,
            })
        }
    };

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        *image.get_pixel(x / factor, y / factor)
    }))
}
