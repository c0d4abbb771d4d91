//! Separable box blur.

use crate::buffer::{self, CHANNELS};
use crate::error::QuantizeError;

/// Blur with a `(2 * radius + 1)`-wide box, horizontally then vertically.
///
/// All four channels are averaged. Samples beyond the image edge repeat the
/// edge pixel, so every output is a mean over the full window. A radius of
/// 0 returns an unchanged copy.
///
/// # Errors
///
/// [`QuantizeError::DimensionMismatch`] if `pixels` is not a `width` x
/// `height` RGBA image.
pub fn box_blur(
    pixels: &[u8],
    width: usize,
    height: usize,
    radius: usize,
) -> Result<Vec<u8>, QuantizeError> {
    buffer::check_dimensions(pixels, width, height)?;
    if radius == 0 || pixels.is_empty() {
        return Ok(pixels.to_vec());
    }

    let window = (2 * radius + 1) as f32;
    let r = radius as isize;
    let clamp_x = |x: isize| x.clamp(0, width as isize - 1) as usize;
    let clamp_y = |y: isize| y.clamp(0, height as isize - 1) as usize;

    // Horizontal pass, kept in f32 so the vertical pass rounds only once
    let mut horizontal = vec![0.0f32; pixels.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f32; CHANNELS];
            for dx in -r..=r {
                let src = (y * width + clamp_x(x as isize + dx)) * CHANNELS;
                for c in 0..CHANNELS {
                    sum[c] += pixels[src + c] as f32;
                }
            }
            let dst = (y * width + x) * CHANNELS;
            for c in 0..CHANNELS {
                horizontal[dst + c] = sum[c] / window;
            }
        }
    }

    let mut output = vec![0u8; pixels.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = [0.0f32; CHANNELS];
            for dy in -r..=r {
                let src = (clamp_y(y as isize + dy) * width + x) * CHANNELS;
                for c in 0..CHANNELS {
                    sum[c] += horizontal[src + c];
                }
            }
            let dst = (y * width + x) * CHANNELS;
            for c in 0..CHANNELS {
                output[dst + c] = (sum[c] / window).round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    Ok(output)
}
