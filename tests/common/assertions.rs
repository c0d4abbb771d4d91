//! Assertion helpers for RGBA buffers.

use pixel_dither::{Palette, Rgb};
use pretty_assertions::assert_eq;

/// Assert every non-transparent pixel of `output` is a palette color.
pub fn assert_palette_colors_only(output: &[u8], palette: &Palette) {
    for (i, px) in output.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let color = Rgb::new(px[0], px[1], px[2]);
        assert!(
            palette.colors().contains(&color),
            "Pixel {i} is {color}, not in palette"
        );
    }
}

/// Assert alpha survived and transparent pixels came out as (0, 0, 0, 0).
pub fn assert_alpha_handled(input: &[u8], output: &[u8]) {
    assert_eq!(input.len(), output.len(), "Buffer length changed");
    for (i, (src, dst)) in input.chunks_exact(4).zip(output.chunks_exact(4)).enumerate() {
        if src[3] == 0 {
            assert_eq!(dst, &[0, 0, 0, 0], "Transparent pixel {i} not cleared");
        } else {
            assert_eq!(dst[3], src[3], "Alpha of pixel {i} changed");
        }
    }
}
