//! Error types for record decoding and strip assembly.

use std::io;

/// Failure to turn one hex record into a tile.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("hex string has odd length {len}")]
    OddLength { len: usize },
    #[error("invalid hex digit {ch:?} at offset {offset}")]
    InvalidDigit { offset: usize, ch: char },
    #[error("record decodes to {actual} bytes, expected {expected}")]
    WrongByteCount { expected: usize, actual: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("scale factor must be at least 1")]
    ZeroFactor,
    #[error("scaled size {width}x{height} overflows")]
    Overflow { width: u64, height: u64 },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    #[error("no images to composite")]
    NoImages,
    #[error("image {index} is {actual} pixels tall, expected {expected}")]
    HeightMismatch {
        index: usize,
        expected: u32,
        actual: u32,
    },
    #[error("composite width overflows")]
    WidthOverflow,
}

/// Failure while reading and converting a whole record file.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("malformed record on line {line}")]
    Record {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Scale(#[from] ScaleError),
}

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("failed to encode PNG")]
    Encoding(#[from] png::EncodingError),
}
