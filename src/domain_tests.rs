//! Domain regression tests for pixel-dither.
//!
//! Each test targets a class of bug rather than a happy path and says what
//! it means when it breaks.

#[cfg(test)]
mod domain_tests {
    use crate::api::{apply_bayer_dithering, apply_floyd_steinberg_dithering, Quantizer};
    use crate::color::Rgb;
    use crate::dither::{apply_palette, Atkinson, Bayer, Dither, Direct, FloydSteinberg, SierraLite};
    use crate::filter::{hue_shifted, to_grayscale};
    use crate::palette::{generate_palette, Palette};

    fn bw() -> Palette {
        Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap()
    }

    /// 16x16 image with smooth color gradients and a transparent corner.
    fn gradient_16x16() -> Vec<u8> {
        let mut pixels = Vec::with_capacity(16 * 16 * 4);
        for y in 0..16u8 {
            for x in 0..16u8 {
                let alpha = if x < 3 && y < 3 { 0 } else { 255 };
                pixels.extend_from_slice(&[x * 16, y * 16, 255 - x * 8 - y * 7, alpha]);
            }
        }
        pixels
    }

    fn all_dispersers() -> Vec<(&'static str, Box<dyn Dither>)> {
        vec![
            ("direct", Box::new(Direct)),
            ("bayer", Box::new(Bayer::new(60.0))),
            ("floyd_steinberg", Box::new(FloydSteinberg)),
            ("atkinson", Box::new(Atkinson)),
            ("sierra_lite", Box::new(SierraLite)),
        ]
    }

    // ========================================================================
    // Reference scenarios
    // ========================================================================

    #[test]
    fn test_scenario_single_color_palette() {
        let pixels = [255, 0, 0, 255].repeat(4);
        let palette = generate_palette(&pixels, 1).unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0)]);
    }

    #[test]
    fn test_scenario_midpoint_rounds_up() {
        let pixels = [0, 0, 0, 255, 128, 128, 128, 255, 255, 255, 255, 255];
        let out = apply_palette(&pixels, &bw()).unwrap();
        assert_eq!(&out[4..8], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_scenario_bayer_zero_strength() {
        let pixels = gradient_16x16();
        let palette = generate_palette(&pixels, 6).unwrap();
        assert_eq!(
            apply_bayer_dithering(&pixels, 16, 16, &palette, 0.0).unwrap(),
            apply_palette(&pixels, &palette).unwrap()
        );
    }

    #[test]
    fn test_scenario_floyd_steinberg_single_pixel() {
        let pixels = [90, 140, 200, 255];
        let palette = generate_palette(&gradient_16x16(), 5).unwrap();
        assert_eq!(
            apply_floyd_steinberg_dithering(&pixels, 1, 1, &palette).unwrap(),
            apply_palette(&pixels, &palette).unwrap()
        );
    }

    // ========================================================================
    // Palette size
    // ========================================================================

    /// If this breaks, median cut is returning fewer colors than requested
    /// when it runs out of splittable buckets, instead of padding.
    #[test]
    fn test_palette_size_always_matches_request() {
        let images = [
            gradient_16x16(),
            [7, 7, 7, 255].repeat(20),
            [50, 60, 70, 0].repeat(5),
            Vec::new(),
        ];
        for pixels in &images {
            for n in [1, 2, 3, 7, 16, 64, 255, 256] {
                let palette = generate_palette(pixels, n).unwrap();
                assert_eq!(palette.len(), n, "requested {n} colors");
            }
        }
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, some stage depends on hash iteration order or an
    /// unstable sort.
    #[test]
    fn test_all_operations_deterministic() {
        let pixels = gradient_16x16();
        let p1 = generate_palette(&pixels, 12).unwrap();
        let p2 = generate_palette(&pixels, 12).unwrap();
        assert_eq!(p1, p2);

        assert_eq!(
            apply_palette(&pixels, &p1).unwrap(),
            apply_palette(&pixels, &p2).unwrap()
        );
        assert_eq!(
            apply_bayer_dithering(&pixels, 16, 16, &p1, 45.0).unwrap(),
            apply_bayer_dithering(&pixels, 16, 16, &p2, 45.0).unwrap()
        );
        assert_eq!(
            apply_floyd_steinberg_dithering(&pixels, 16, 16, &p1).unwrap(),
            apply_floyd_steinberg_dithering(&pixels, 16, 16, &p2).unwrap()
        );
    }

    // ========================================================================
    // Alpha handling
    // ========================================================================

    /// If this breaks, a disperser is quantizing alpha or leaking color into
    /// fully transparent pixels.
    #[test]
    fn test_alpha_pass_through_all_dispersers() {
        let mut pixels = gradient_16x16();
        for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
            if px[3] != 0 {
                px[3] = (i % 254 + 1) as u8;
            }
        }
        let palette = generate_palette(&pixels, 4).unwrap();

        for (name, disperser) in all_dispersers() {
            let out = disperser.dither(&pixels, 16, 16, &palette).unwrap();
            for (src, dst) in pixels.chunks_exact(4).zip(out.chunks_exact(4)) {
                if src[3] == 0 {
                    assert_eq!(dst, &[0, 0, 0, 0], "{name}: transparent pixel not cleared");
                } else {
                    assert_eq!(dst[3], src[3], "{name}: alpha changed");
                    assert!(
                        palette.colors().contains(&Rgb::new(dst[0], dst[1], dst[2])),
                        "{name}: {dst:?} is not a palette color"
                    );
                }
            }
        }
    }

    /// If this breaks, palette generation is sampling semi-transparent
    /// pixels at or below the opacity threshold.
    #[test]
    fn test_half_transparent_pixels_ignored_by_generation() {
        let pixels = [[0, 0, 255, 128], [255, 0, 0, 129]].concat().repeat(4);
        let palette = generate_palette(&pixels, 1).unwrap();
        assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0)]);
    }

    // ========================================================================
    // Error diffusion
    // ========================================================================

    /// If this breaks, error diffusion is losing or amplifying error inside
    /// the image: the mean brightness of a flat gray drifts away from the
    /// input. Only edge pixels may drop part of their error.
    #[test]
    fn test_floyd_steinberg_preserves_mean_brightness() {
        let size = 32;
        for value in [40u8, 100, 180, 220] {
            let pixels = [value, value, value, 255].repeat(size * size);
            let out = apply_floyd_steinberg_dithering(&pixels, size, size, &bw()).unwrap();
            let mean = out.chunks_exact(4).map(|px| px[0] as f64).sum::<f64>()
                / (size * size) as f64;
            assert!(
                (mean - value as f64).abs() < 12.0,
                "gray {value} dithered to mean {mean:.1}"
            );
        }
    }

    /// If this breaks, an error diffusion kernel writes outside the image
    /// or wraps error from the right edge onto the next row's left edge.
    #[test]
    fn test_diffusion_does_not_wrap_rows() {
        // Error from the right edge may only reach (0,1) and (1,1)
        let palette = Palette::new(vec![Rgb::gray(0), Rgb::gray(60)]).unwrap();
        let pixels = [[0, 0, 0, 255], [25, 25, 25, 255]].concat().repeat(2);
        let out = apply_floyd_steinberg_dithering(&pixels, 2, 2, &palette).unwrap();
        // (1,0): 25 -> 0, error 25; only (0,1) += 3/16*25 and (1,1) += 5/16*25
        // (0,1): 0 + 4.69 -> 0; (1,1): 25 + 7.81 + 7/16*4.69 = 34.9 -> 60
        assert_eq!(
            out,
            [[0, 0, 0, 255], [0, 0, 0, 255], [0, 0, 0, 255], [60, 60, 60, 255]].concat()
        );
    }

    // ========================================================================
    // Idempotence
    // ========================================================================

    /// If this breaks, nearest-color matching is not returning exact palette
    /// entries for inputs that already are palette entries.
    #[test]
    fn test_apply_palette_idempotent() {
        let pixels = gradient_16x16();
        let palette = generate_palette(&pixels, 9).unwrap();
        let once = apply_palette(&pixels, &palette).unwrap();
        assert_eq!(apply_palette(&once, &palette).unwrap(), once);
    }

    /// If this breaks, error diffusion is perturbing pixels that already
    /// match the palette exactly.
    #[test]
    fn test_dither_of_quantized_image_is_stable() {
        let pixels = gradient_16x16();
        let palette = generate_palette(&pixels, 9).unwrap();
        let quantized = apply_palette(&pixels, &palette).unwrap();
        for (name, disperser) in all_dispersers() {
            if name == "bayer" {
                continue;
            }
            let out = disperser.dither(&quantized, 16, 16, &palette).unwrap();
            assert_eq!(out, quantized, "{name} changed an already quantized image");
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// If this breaks, hue rotation is touching saturation or lightness:
    /// rotating a gray must not give it a tint.
    #[test]
    fn test_hue_shift_then_grayscale_on_grays() {
        let pixels: Vec<u8> = (0..=255u8).step_by(15).flat_map(|v| [v, v, v, 255]).collect();
        let shifted = hue_shifted(&pixels, 123.0).unwrap();
        assert_eq!(shifted, pixels);
        assert_eq!(to_grayscale(&shifted).unwrap(), pixels);
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// If this breaks, the builder is generating a palette from something
    /// other than the image it processes.
    #[test]
    fn test_quantizer_matches_manual_pipeline() {
        let pixels = gradient_16x16();
        let image = Quantizer::new().colors(6.0).process(&pixels, 16, 16).unwrap();

        let palette = generate_palette(&pixels, 6).unwrap();
        let manual = apply_floyd_steinberg_dithering(&pixels, 16, 16, &palette).unwrap();

        assert_eq!(image.palette(), Some(&palette));
        assert_eq!(image.pixels(), manual.as_slice());
    }
}
