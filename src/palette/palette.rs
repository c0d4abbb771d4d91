//! Palette struct with nearest-color matching.

use crate::color::Rgb;
use crate::error::{PaletteError, MAX_PALETTE_SIZE};

/// An ordered, validated list of palette colors.
///
/// A `Palette` always holds between 1 and 256 colors; the constructor rejects
/// anything else, so matching and dithering never have to handle an empty
/// palette. Duplicate entries are allowed: generated palettes are padded by
/// repeating their last color.
///
/// # Example
///
/// ```
/// use pixel_dither::{Palette, Rgb};
///
/// let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_closest([200.0, 200.0, 200.0]), Rgb::gray(255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Empty`] if `colors` is empty
    /// - [`PaletteError::TooManyColors`] if there are more than 256 colors
    pub fn new(colors: impl Into<Vec<Rgb>>) -> Result<Self, PaletteError> {
        let colors = colors.into();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(PaletteError::TooManyColors { len: colors.len() });
        }
        Ok(Self { colors })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any string is invalid, and the
    /// same errors as [`Palette::new`] otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .map(|s| s.as_ref().parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Build an evenly spaced grayscale ramp of `n` shades from black to white.
    ///
    /// `n` is clamped to 1..=256. A single-shade ramp is black.
    pub fn grayscale_ramp(n: usize) -> Self {
        let n = n.clamp(1, MAX_PALETTE_SIZE);
        let colors = if n == 1 {
            vec![Rgb::BLACK]
        } else {
            (0..n)
                .map(|i| Rgb::gray((i as f64 * 255.0 / (n - 1) as f64).round() as u8))
                .collect()
        };
        Self { colors }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at `idx`, `None` if out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in palette order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Consume the palette, returning its colors.
    pub fn into_colors(self) -> Vec<Rgb> {
        self.colors
    }

    /// Find the palette entry nearest to `color`.
    ///
    /// Distance is squared Euclidean over R, G and B. `color` need not be in
    /// range; dithering passes perturbed values straight through.
    ///
    /// Returns `(index, squared_distance)`. On exact ties the earliest entry
    /// wins.
    #[inline]
    pub fn find_nearest(&self, color: [f32; 3]) -> (usize, f32) {
        // Linear scan; palettes are at most 256 entries
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, entry) in self.colors.iter().enumerate() {
            let dist = entry.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Find the palette color nearest to `color`.
    #[inline]
    pub fn find_closest(&self, color: [f32; 3]) -> Rgb {
        self.colors[self.find_nearest(color).0]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
