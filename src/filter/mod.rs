//! Per-pixel and separable image filters.
//!
//! These run before quantization to restyle an image: hue rotation,
//! grayscale conversion and box blur. Each one keeps the buffer layout
//! (RGBA, row-major) and size.

mod blur;
mod grayscale;
mod hue;

pub use blur::box_blur;
pub use grayscale::{luma, to_grayscale};
pub use hue::{apply_hue_shift, apply_hue_shift_in_place, hue_shifted};
