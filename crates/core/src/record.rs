//! Hex record decoding.
//!
//! A record is one line of text holding a raw 24x24 RGBA dump as hex digits.
//! Producers of these dumps often print bytes as `0x..` literals, so the
//! `0x` tokens are removed before the digits are parsed.

use crate::error::DecodeError;
use crate::{Tile, RECORD_BYTES, TILE_SIZE};
use image::ImageBuffer;
use serde::{Deserialize, Serialize};

/// How `0x` tokens are removed from a record before decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StripMode {
    /// Remove every `0x` substring, wherever it appears.
    ///
    /// Note: this also eats a `0` digit followed by an `x` that was never
    /// meant as a prefix; dumps are expected not to contain one.
    #[default]
    Anywhere,
    /// Remove a single leading `0x` or `0X`.
    Leading,
}

impl StripMode {
    pub fn strip(self, text: &str) -> String {
        match self {
            StripMode::Anywhere => text.replace("0x", ""),
            StripMode::Leading => text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text)
                .to_string(),
        }
    }
}

/// Parse a string of hex digit pairs into bytes.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(hex.len() / 2);
    let mut high: Option<u8> = None;
    for (offset, ch) in hex.char_indices() {
        let digit = ch
            .to_digit(16)
            .ok_or(DecodeError::InvalidDigit { offset, ch })? as u8;
        match high.take() {
            Some(hi) => out.push((hi << 4) | digit),
            None => high = Some(digit),
        }
    }
    if high.is_some() {
        return Err(DecodeError::OddLength { len: hex.len() });
    }
    Ok(out)
}

/// Build a tile from a raw RGBA dump. The buffer must be exactly
/// [`RECORD_BYTES`] long.
pub fn tile_from_bytes(bytes: Vec<u8>) -> Result<Tile, DecodeError> {
    let actual = bytes.len();
    if actual != RECORD_BYTES {
        return Err(DecodeError::WrongByteCount {
            expected: RECORD_BYTES,
            actual,
        });
    }
    ImageBuffer::from_raw(TILE_SIZE, TILE_SIZE, bytes).ok_or(DecodeError::WrongByteCount {
        expected: RECORD_BYTES,
        actual,
    })
}

/// Decode one record line into a 24x24 RGBA tile.
pub fn decode(text: &str, mode: StripMode) -> Result<Tile, DecodeError> {
    let hex = mode.strip(text);
    tile_from_bytes(hex_to_bytes(&hex)?)
}
