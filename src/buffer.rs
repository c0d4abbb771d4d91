//! Flat RGBA pixel buffer validation.
//!
//! Buffers are plain `&[u8]` slices, four bytes per pixel (R, G, B, A) in
//! row-major order. These helpers enforce the length invariants before any
//! per-pixel loop indexes into them.

use crate::error::QuantizeError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Check that `pixels` holds a whole number of RGBA pixels.
///
/// Returns the pixel count.
pub fn check_len(pixels: &[u8]) -> Result<usize, QuantizeError> {
    if pixels.len() % CHANNELS != 0 {
        return Err(QuantizeError::InvalidBufferLength { len: pixels.len() });
    }
    Ok(pixels.len() / CHANNELS)
}

/// Check that `pixels` is exactly a `width` x `height` RGBA image.
pub fn check_dimensions(pixels: &[u8], width: usize, height: usize) -> Result<(), QuantizeError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS));
    if expected != Some(pixels.len()) {
        return Err(QuantizeError::DimensionMismatch {
            width,
            height,
            len: pixels.len(),
        });
    }
    Ok(())
}
