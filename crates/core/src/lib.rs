//! Decoding, scaling and tiling of hex-dumped RGBA tiles.
//!
//! Each input record is a 24x24 RGBA buffer written out as hex. Records are
//! decoded into tiles, upscaled with nearest-neighbor sampling and placed
//! side by side in one strip.

pub mod composite;
pub mod display;
pub mod error;
pub mod export;
pub mod loader;
pub mod record;
pub mod scale;

pub use composite::composite;
pub use error::{CompositeError, DecodeError, ExportError, LoadError, ScaleError};
pub use loader::{load, BlankLines, LoadOptions};
pub use record::{decode, StripMode};
pub use scale::scale;

/// Width and height of a decoded tile in pixels.
pub const TILE_SIZE: u32 = 24;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Exact byte length of one decoded record.
pub const RECORD_BYTES: usize = TILE_SIZE as usize * TILE_SIZE as usize * CHANNELS;

/// Upscale factor used when none is configured.
pub const DEFAULT_SCALE: u32 = 12;

/// An RGBA image, 8 bits per channel, row-major.
pub type Tile = image::RgbaImage;
