//! Reading a record file into scaled tiles.
//!
//! One record per line. Lines are trimmed before decoding; the first bad
//! record aborts the whole load.

use crate::error::LoadError;
use crate::record::{decode, StripMode};
use crate::scale::scale;
use crate::{Tile, DEFAULT_SCALE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// What to do with empty or whitespace-only lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLines {
    #[default]
    Skip,
    /// Decode them like any other line, which fails as a zero-byte record.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub scale: u32,
    pub strip_mode: StripMode,
    pub blank_lines: BlankLines,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            strip_mode: StripMode::default(),
            blank_lines: BlankLines::default(),
        }
    }
}

/// Decode and scale every record in `reader`, in line order.
pub fn load<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Vec<Tile>, LoadError> {
    let mut images = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let text = line.trim();

        if text.is_empty() && options.blank_lines == BlankLines::Skip {
            debug!("line {}: blank, skipped", number);
            continue;
        }

        let tile = decode(text, options.strip_mode)
            .map_err(|source| LoadError::Record { line: number, source })?;
        images.push(scale(&tile, options.scale)?);
        debug!("line {}: decoded {}x{} tile", number, tile.width(), tile.height());
    }
    Ok(images)
}
