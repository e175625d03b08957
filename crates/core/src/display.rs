//! Conversion of a strip into a window framebuffer.
//!
//! Window backends take one `u32` per pixel in `0x00RRGGBB` form and ignore
//! alpha, so translucent pixels are blended over a checkerboard first.

use crate::Tile;

/// Edge length of one checkerboard square, in output pixels.
pub const CHECKER_SIZE: u32 = 8;

const CHECKER_LIGHT: u8 = 0xCC;
const CHECKER_DARK: u8 = 0x99;

fn checker(x: u32, y: u32) -> u8 {
    if ((x / CHECKER_SIZE) + (y / CHECKER_SIZE)) % 2 == 0 {
        CHECKER_LIGHT
    } else {
        CHECKER_DARK
    }
}

/// Blend one channel of `fg` over `bg` with 8-bit `alpha`.
#[inline]
fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

#[inline]
pub fn from_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Flatten `image` into a `0x00RRGGBB` buffer, row-major.
pub fn to_framebuffer(image: &Tile) -> Vec<u32> {
    image
        .enumerate_pixels()
        .map(|(x, y, px)| {
            let [r, g, b, a] = px.0;
            match a {
                255 => from_rgb(r, g, b),
                _ => {
                    let bg = checker(x, y);
                    from_rgb(blend(r, bg, a), blend(g, bg, a), blend(b, bg, a))
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_opaque_pixels_pass_through() {
        let img = Tile::from_pixel(2, 2, Rgba([0x12, 0x34, 0x56, 0xFF]));
        assert_eq!(to_framebuffer(&img), vec![0x00123456; 4]);
    }

    #[test]
    fn test_transparent_pixels_show_checkerboard() {
        let img = Tile::from_pixel(CHECKER_SIZE * 2, 1, Rgba([0xFF, 0, 0, 0]));
        let fb = to_framebuffer(&img);
        assert_eq!(fb[0], from_rgb(CHECKER_LIGHT, CHECKER_LIGHT, CHECKER_LIGHT));
        assert_eq!(
            fb[CHECKER_SIZE as usize],
            from_rgb(CHECKER_DARK, CHECKER_DARK, CHECKER_DARK)
        );
    }

    #[test]
    fn test_half_alpha_blends() {
        let img = Tile::from_pixel(1, 1, Rgba([0xFF, 0x00, 0x00, 128]));
        let fb = to_framebuffer(&img);
        let r = ((fb[0] >> 16) & 0xFF) as u8;
        let g = ((fb[0] >> 8) & 0xFF) as u8;
        // 255 * 128/255 + 0xCC * 127/255, rounded
        assert!((229..=230).contains(&r), "red was {}", r);
        assert!((101..=102).contains(&g), "green was {}", g);
    }

    #[test]
    fn test_row_major_order() {
        let img = Tile::from_fn(2, 2, |x, y| Rgba([(y * 2 + x) as u8, 0, 0, 255]));
        let fb = to_framebuffer(&img);
        let reds: Vec<u32> = fb.iter().map(|p| p >> 16).collect();
        assert_eq!(reds, vec![0, 1, 2, 3]);
    }
}
