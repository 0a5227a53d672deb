//! Error types for rasterm.

use std::fmt;
use std::io;

/// Result type alias for rasterm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rasterm operations.
#[derive(Debug)]
pub enum Error {
    /// A surface is already open on this backend.
    AlreadyOpen,
    /// Grid or glyph dimension was zero.
    InvalidDimensions {
        glyph_width: u32,
        glyph_height: u32,
        columns: u32,
        rows: u32,
    },
    /// Font source geometry cannot hold a single glyph.
    FontGeometry {
        glyph_width: u32,
        glyph_height: u32,
        pitch: u32,
    },
    /// Destination buffer too small for the requested dump.
    BufferTooSmall { needed: usize, got: usize },
    /// Feature not available on this backend.
    Unsupported(&'static str),
    /// Backend surface or presentation failure.
    Backend(String),
    /// I/O error from snapshot operations.
    Io(io::Error),
    /// Image encode/decode error from snapshot operations.
    #[cfg(feature = "snapshot")]
    Image(image::ImageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOpen => write!(f, "a surface is already open on this backend"),
            Self::InvalidDimensions {
                glyph_width,
                glyph_height,
                columns,
                rows,
            } => {
                write!(
                    f,
                    "invalid dimensions: {glyph_width}x{glyph_height} glyphs, {columns}x{rows} cells"
                )
            }
            Self::FontGeometry {
                glyph_width,
                glyph_height,
                pitch,
            } => {
                write!(
                    f,
                    "font source cannot hold {glyph_width}x{glyph_height} glyphs at pitch {pitch}"
                )
            }
            Self::BufferTooSmall { needed, got } => {
                write!(f, "buffer too small: needed {needed} bytes, got {got}")
            }
            Self::Unsupported(what) => write!(f, "unsupported on this backend: {what}"),
            Self::Backend(msg) => write!(f, "backend error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "snapshot")]
            Self::Image(e) => write!(f, "image error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "snapshot")]
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(feature = "snapshot")]
impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}
