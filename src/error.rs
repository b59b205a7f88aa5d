use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Palette source could not be turned into exactly 256 colors.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read palette '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("palette line {line}: missing ':' separator")]
    MissingColon { line: usize },

    #[error("palette line {line}: invalid hex value '{value}'")]
    InvalidHex {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("palette line {line}: value {value:#x} does not fit in RRGGBB")]
    OutOfRange { line: usize, value: u32 },

    #[error("palette must have exactly 256 entries, found {found}")]
    WrongCount { found: usize },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read image '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("PNG decode error: {0}")]
    Png(#[from] png::DecodingError),

    #[error("unsupported PNG layout: {color_type:?} at {bit_depth:?}")]
    UnsupportedLayout {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },

    #[error("invalid image dimensions {width}x{height} for {len} bytes")]
    Dimensions {
        width: usize,
        height: usize,
        len: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResizeError {
    #[error(
        "cannot enlarge {src_width}x{src_height} image to {cols}x{rows} cells; only downscaling is supported"
    )]
    Unsupported {
        src_width: usize,
        src_height: usize,
        rows: usize,
        cols: usize,
    },

    #[error("target grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Resize(#[from] ResizeError),

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
