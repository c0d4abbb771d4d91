//! One-call wrappers over the dispersers and the matcher.

use crate::color::Rgb;
use crate::dither::{Bayer, Dither, FloydSteinberg};
use crate::error::{PaletteError, QuantizeError};
use crate::palette::Palette;

/// Bayer-dither `pixels` onto `palette` at `strength` (clamped to 0..=100).
///
/// At strength 0 the result equals [`apply_palette`](crate::apply_palette).
pub fn apply_bayer_dithering(
    pixels: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
    strength: f32,
) -> Result<Vec<u8>, QuantizeError> {
    Bayer::new(strength).dither(pixels, width, height, palette)
}

/// Floyd-Steinberg error diffusion of `pixels` onto `palette`.
pub fn apply_floyd_steinberg_dithering(
    pixels: &[u8],
    width: usize,
    height: usize,
    palette: &Palette,
) -> Result<Vec<u8>, QuantizeError> {
    FloydSteinberg.dither(pixels, width, height, palette)
}

/// Nearest color to `pixel` in an unvalidated color list.
///
/// Ties go to the earliest entry.
///
/// # Errors
///
/// [`PaletteError::Empty`] if `colors` is empty.
///
/// # Example
///
/// ```
/// use pixel_dither::{find_closest_palette_color, Rgb};
///
/// let colors = [Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)];
/// let nearest = find_closest_palette_color([200.0, 30.0, 90.0], &colors).unwrap();
/// assert_eq!(nearest, Rgb::new(255, 0, 0));
/// ```
pub fn find_closest_palette_color(pixel: [f32; 3], colors: &[Rgb]) -> Result<Rgb, PaletteError> {
    let palette = Palette::new(colors)?;
    Ok(palette.find_closest(pixel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_closest_empty() {
        assert_eq!(
            find_closest_palette_color([0.0; 3], &[]),
            Err(PaletteError::Empty)
        );
    }

    #[test]
    fn test_find_closest_tie_goes_first() {
        let colors = [Rgb::gray(0), Rgb::gray(254)];
        assert_eq!(
            find_closest_palette_color([127.0; 3], &colors).unwrap(),
            Rgb::gray(0)
        );
    }

    #[test]
    fn test_find_closest_out_of_range_input() {
        let colors = [Rgb::gray(0), Rgb::gray(255)];
        assert_eq!(
            find_closest_palette_color([300.0, 300.0, 300.0], &colors).unwrap(),
            Rgb::gray(255)
        );
        assert_eq!(
            find_closest_palette_color([-40.0, -40.0, -40.0], &colors).unwrap(),
            Rgb::gray(0)
        );
    }

    #[test]
    fn test_wrappers_match_dispersers() {
        let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap();
        let pixels: Vec<u8> = (0..16u8).flat_map(|v| [v * 16, v * 16, v * 16, 255]).collect();
        assert_eq!(
            apply_bayer_dithering(&pixels, 4, 4, &palette, 40.0).unwrap(),
            Bayer::new(40.0).dither(&pixels, 4, 4, &palette).unwrap()
        );
        assert_eq!(
            apply_floyd_steinberg_dithering(&pixels, 4, 4, &palette).unwrap(),
            FloydSteinberg.dither(&pixels, 4, 4, &palette).unwrap()
        );
    }
}
