//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit palette color, hex parsing
//! - [`Hsl`]: hue/saturation/lightness, used by the hue-shift filter
//!
//! # Example
//!
//! ```
//! use pixel_dither::{hsl_to_rgb, rgb_to_hsl, Rgb};
//!
//! let orange = Rgb::new(255, 128, 0);
//! let hsl = rgb_to_hsl(orange);
//! assert_eq!(hsl_to_rgb(hsl), orange);
//! ```

mod hsl;
mod rgb;

pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use rgb::Rgb;
