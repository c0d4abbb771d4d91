//! Palette types, nearest-color matching and median-cut generation.

mod median_cut;
mod palette;

pub use median_cut::{clamp_color_count, generate_palette, MAX_SAMPLES, OPACITY_THRESHOLD};
pub use palette::Palette;
