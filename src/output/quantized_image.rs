//! QuantizedImage: dithered RGBA pixels plus the palette that produced them.

use std::collections::HashMap;

use crate::buffer::CHANNELS;
use crate::color::Rgb;
use crate::palette::Palette;

/// The result of a [`Quantizer`](crate::Quantizer) run.
///
/// Holds the output RGBA buffer, its dimensions and the palette it was
/// mapped onto. When the pipeline fell back to passthrough (see
/// [`InvalidPaletteMode`](crate::InvalidPaletteMode)) the pixels are the
/// unmodified input and there is no palette.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedImage {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    palette: Option<Palette>,
}

impl QuantizedImage {
    /// Wrap a dithered buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height * 4`.
    pub fn new(pixels: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(pixels.len(), width * height * CHANNELS);
        Self {
            pixels,
            width,
            height,
            palette: Some(palette),
        }
    }

    /// Wrap an untouched input buffer.
    pub(crate) fn passthrough(pixels: Vec<u8>, width: usize, height: usize) -> Self {
        Self {
            pixels,
            width,
            height,
            palette: None,
        }
    }

    /// RGBA bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning the RGBA bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The palette the pixels were mapped onto, `None` for passthrough.
    #[inline]
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    /// Whether the input was returned unchanged.
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.palette.is_none()
    }

    /// Number of non-transparent pixels using each palette entry.
    ///
    /// The result has one slot per palette entry. A color listed more than
    /// once is counted against its first occurrence. Empty for passthrough
    /// images.
    pub fn color_counts(&self) -> Vec<usize> {
        let Some(palette) = &self.palette else {
            return Vec::new();
        };

        let mut first_index: HashMap<Rgb, usize> = HashMap::with_capacity(palette.len());
        for (i, &color) in palette.colors().iter().enumerate() {
            first_index.entry(color).or_insert(i);
        }

        let mut counts = vec![0; palette.len()];
        for px in self.pixels.chunks_exact(CHANNELS) {
            if px[3] == 0 {
                continue;
            }
            if let Some(&i) = first_index.get(&Rgb::new(px[0], px[1], px[2])) {
                counts[i] += 1;
            }
        }
        counts
    }
}
