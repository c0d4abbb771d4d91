//! Hue rotation.
//!
//! Three ownership variants are provided: rotate a borrowed buffer in
//! place, rotate an owned buffer and hand the same storage back, or leave
//! the input alone and return a new buffer.

use crate::buffer::{self, CHANNELS};
use crate::color::{hsl_to_rgb, rgb_to_hsl, Rgb};
use crate::error::QuantizeError;

/// Rotate the hue of every pixel in place by `degrees`.
///
/// Saturation, lightness and alpha are unchanged; grays stay gray. A NaN
/// angle leaves the buffer as it is.
///
/// # Errors
///
/// [`QuantizeError::InvalidBufferLength`] if `pixels.len()` is not a
/// multiple of 4. The buffer is untouched in that case.
pub fn apply_hue_shift_in_place(pixels: &mut [u8], degrees: f32) -> Result<(), QuantizeError> {
    buffer::check_len(pixels)?;
    if degrees.is_nan() || degrees.rem_euclid(360.0) == 0.0 {
        return Ok(());
    }

    for px in pixels.chunks_exact_mut(CHANNELS) {
        let hsl = rgb_to_hsl(Rgb::new(px[0], px[1], px[2]));
        let shifted = hsl_to_rgb(hsl.rotate(degrees));
        px[..3].copy_from_slice(&shifted.to_bytes());
    }
    Ok(())
}

/// Rotate the hue of an owned buffer, returning the same allocation.
pub fn apply_hue_shift(mut pixels: Vec<u8>, degrees: f32) -> Result<Vec<u8>, QuantizeError> {
    apply_hue_shift_in_place(&mut pixels, degrees)?;
    Ok(pixels)
}

/// Return a hue-rotated copy of `pixels`.
pub fn hue_shifted(pixels: &[u8], degrees: f32) -> Result<Vec<u8>, QuantizeError> {
    apply_hue_shift(pixels.to_vec(), degrees)
}
