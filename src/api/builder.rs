//! Quantizer builder, the main entry point for whole-image processing.
//!
//! [`Quantizer`] picks or generates a palette, runs the selected disperser
//! and wraps the result in a [`QuantizedImage`].

use crate::buffer;
use crate::color::Rgb;
use crate::config::{InvalidPaletteMode, QuantizeConfig};
use crate::dither::{Atkinson, Bayer, Dither, DitherAlgorithm, Direct, FloydSteinberg, SierraLite};
use crate::error::{PaletteError, QuantizeError};
use crate::output::QuantizedImage;
use crate::palette::{clamp_color_count, generate_palette, Palette};

/// High-level quantization builder.
///
/// # Design
///
/// - Without a fixed palette, a median-cut palette is generated per image
/// - Configuration methods consume and return `self`
/// - [`process()`](Self::process) takes `&self`, so one builder can
///   handle many images
/// - A fixed palette, including one given as hex strings, is validated
///   when an image is processed, where [`InvalidPaletteMode`] decides
///   between failing and passing the input through
///
/// # Example
///
/// ```
/// use pixel_dither::{DitherAlgorithm, Quantizer};
///
/// let pixels = [
///     [255, 0, 0, 255], [250, 5, 5, 255],
///     [0, 0, 255, 255], [5, 5, 250, 255],
/// ]
/// .concat();
///
/// let image = Quantizer::new()
///     .colors(2.0)
///     .algorithm(DitherAlgorithm::None)
///     .process(&pixels, 2, 2)
///     .unwrap();
///
/// assert_eq!(image.palette().map(|p| p.len()), Some(2));
/// assert_eq!(image.color_counts(), vec![2, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantizer {
    /// Fixed palette, or the error from parsing it
    palette: Option<Result<Vec<Rgb>, PaletteError>>,
    colors: usize,
    algorithm: DitherAlgorithm,
    strength: f32,
    on_invalid_palette: InvalidPaletteMode,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Quantizer {
    /// Create a quantizer that generates 16 colors and uses Floyd-Steinberg.
    pub fn new() -> Self {
        Self {
            palette: None,
            colors: 16,
            algorithm: DitherAlgorithm::default(),
            strength: 100.0,
            on_invalid_palette: InvalidPaletteMode::default(),
        }
    }

    /// Build a quantizer from a loaded [`QuantizeConfig`].
    ///
    /// Palette entries are parsed here but any error is held back until
    /// [`process()`](Self::process), so `on_invalid_palette` covers
    /// malformed entries as well as an empty list.
    pub fn from_config(config: &QuantizeConfig) -> Self {
        let quantizer = Self::new()
            .colors(config.colors)
            .algorithm(config.dither)
            .strength(config.strength)
            .on_invalid_palette(config.on_invalid_palette);

        match &config.palette {
            Some(hex) => quantizer.palette_hex(hex),
            None => quantizer,
        }
    }

    /// Use a fixed palette instead of generating one.
    #[inline]
    pub fn palette(mut self, colors: impl Into<Vec<Rgb>>) -> Self {
        self.palette = Some(Ok(colors.into()));
        self
    }

    /// Use a fixed palette given as hex strings such as `"#FF0000"`.
    ///
    /// Parse errors surface from [`process()`](Self::process).
    pub fn palette_hex<S: AsRef<str>>(mut self, hex: &[S]) -> Self {
        let colors = hex
            .iter()
            .map(|s| s.as_ref().parse::<Rgb>().map_err(PaletteError::from))
            .collect();
        self.palette = Some(colors);
        self
    }

    /// Set the number of colors to generate (truncated, clamped to 1..=256).
    #[inline]
    pub fn colors(mut self, count: f64) -> Self {
        self.colors = clamp_color_count(count);
        self
    }

    /// Set the dither algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the Bayer strength. Ignored by the other algorithms.
    #[inline]
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Set what [`process()`](Self::process) does with an invalid fixed palette.
    #[inline]
    pub fn on_invalid_palette(mut self, mode: InvalidPaletteMode) -> Self {
        self.on_invalid_palette = mode;
        self
    }

    /// Quantize a `width` x `height` RGBA image.
    ///
    /// 1. Resolve the palette (fixed, or generated from `pixels`)
    /// 2. Map pixels with the selected algorithm
    /// 3. Wrap in [`QuantizedImage`]
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::DimensionMismatch`] for a malformed buffer
    /// - [`QuantizeError::Palette`] for an invalid fixed palette in
    ///   [`InvalidPaletteMode::Strict`]
    pub fn process(
        &self,
        pixels: &[u8],
        width: usize,
        height: usize,
    ) -> Result<QuantizedImage, QuantizeError> {
        buffer::check_dimensions(pixels, width, height)?;

        let palette = match &self.palette {
            Some(fixed) => match fixed.clone().and_then(Palette::new) {
                Ok(palette) => palette,
                Err(e) if self.on_invalid_palette == InvalidPaletteMode::Passthrough => {
                    tracing::warn!(%e, "Invalid palette, returning input unchanged");
                    return Ok(QuantizedImage::passthrough(pixels.to_vec(), width, height));
                }
                Err(e) => return Err(e.into()),
            },
            None => generate_palette(pixels, self.colors)?,
        };

        let output = self.ditherer().dither(pixels, width, height, &palette)?;

        tracing::debug!(
            width,
            height,
            colors = palette.len(),
            algorithm = ?self.algorithm,
            "Quantized image"
        );

        Ok(QuantizedImage::new(output, width, height, palette))
    }

    fn ditherer(&self) -> Box<dyn Dither> {
        match self.algorithm {
            DitherAlgorithm::None => Box::new(Direct),
            DitherAlgorithm::Bayer => Box::new(Bayer::new(self.strength)),
            DitherAlgorithm::FloydSteinberg => Box::new(FloydSteinberg),
            DitherAlgorithm::Atkinson => Box::new(Atkinson),
            DitherAlgorithm::SierraLite => Box::new(SierraLite),
        }
    }
}
