//! Error types for palette construction and pixel buffer processing.

use std::num::ParseIntError;

use thiserror::Error;

/// Largest palette the crate will build or accept.
pub const MAX_PALETTE_SIZE: usize = 256;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Palettes are validated once at construction, so every matching or
/// dithering call that receives a [`Palette`](crate::Palette) can rely on it
/// holding between 1 and 256 colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided
    #[error("palette cannot be empty")]
    Empty,

    /// More colors than an indexed image can address
    #[error("palette has {len} colors (max {MAX_PALETTE_SIZE})")]
    TooManyColors {
        /// Number of colors supplied
        len: usize,
    },

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

/// Unified error type for the public API.
#[derive(Debug, Error)]
pub enum QuantizeError {
    /// Palette validation failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Buffer length is not a whole number of RGBA pixels
    #[error("buffer length {len} is not a multiple of 4")]
    InvalidBufferLength {
        /// Length of the supplied buffer
        len: usize,
    },

    /// Buffer length does not match the stated dimensions
    #[error("buffer length {len} does not match {width}x{height} RGBA image")]
    DimensionMismatch {
        /// Stated width in pixels
        width: usize,
        /// Stated height in pixels
        height: usize,
        /// Length of the supplied buffer
        len: usize,
    },

    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(String),
}
