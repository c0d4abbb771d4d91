#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! pixel-dither: palette reduction and dithering for pixel-art images
//!
//! Images are flat RGBA byte buffers (`R, G, B, A` per pixel, row-major).
//! The crate builds a small palette for an image with median cut, then maps
//! every pixel onto it, optionally dithering to hide banding.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder runs the whole pipeline:
//!
//! ```
//! use pixel_dither::{DitherAlgorithm, Quantizer};
//!
//! let pixels = [64, 128, 192, 255].repeat(16);
//! let image = Quantizer::new()
//!     .colors(8.0)
//!     .algorithm(DitherAlgorithm::Bayer)
//!     .strength(50.0)
//!     .process(&pixels, 4, 4)
//!     .unwrap();
//!
//! assert_eq!(image.pixels().len(), pixels.len());
//! ```
//!
//! # Building Blocks
//!
//! Each stage is also usable on its own:
//!
//! ```
//! use pixel_dither::{apply_floyd_steinberg_dithering, generate_palette};
//!
//! let pixels = [
//!     [255, 0, 0, 255], [0, 255, 0, 255],
//!     [0, 0, 255, 255], [255, 255, 255, 255],
//! ]
//! .concat();
//!
//! let palette = generate_palette(&pixels, 2).unwrap();
//! let dithered = apply_floyd_steinberg_dithering(&pixels, 2, 2, &palette).unwrap();
//! assert_eq!(dithered.len(), pixels.len());
//! ```
//!
//! # Transparency
//!
//! Pixels with alpha 0 come out of every disperser as `(0, 0, 0, 0)` and
//! take no part in error diffusion. All other pixels keep their alpha.
//! Palette generation only samples pixels with alpha above 128.
//!
//! # Dithering Algorithms
//!
//! - Direct mapping ([`apply_palette`])
//! - Bayer ordered dithering, matrix size chosen by strength
//! - Floyd-Steinberg, Atkinson and Sierra Lite error diffusion
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (palette generation at `debug`,
//! passthrough fallback at `warn`, config loading at `info`) and leaves
//! subscriber setup to the application.

pub mod api;
pub mod buffer;
pub mod color;
pub mod config;
pub mod dither;
pub mod error;
pub mod filter;
pub mod output;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{
    apply_bayer_dithering, apply_floyd_steinberg_dithering, find_closest_palette_color, Quantizer,
};
pub use color::{hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
pub use config::{InvalidPaletteMode, QuantizeConfig};
pub use dither::{
    apply_palette, Atkinson, Bayer, Direct, Dither, DitherAlgorithm, FloydSteinberg, SierraLite,
};
pub use error::{PaletteError, ParseColorError, QuantizeError, MAX_PALETTE_SIZE};
pub use filter::{apply_hue_shift, apply_hue_shift_in_place, box_blur, hue_shifted, to_grayscale};
pub use output::QuantizedImage;
pub use palette::{clamp_color_count, generate_palette, Palette};
