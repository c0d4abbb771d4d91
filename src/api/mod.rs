//! Public API: free functions over RGBA buffers and the [`Quantizer`]
//! builder.

mod builder;
mod functions;

pub use builder::Quantizer;
pub use functions::{
    apply_bayer_dithering, apply_floyd_steinberg_dithering, find_closest_palette_color,
};
