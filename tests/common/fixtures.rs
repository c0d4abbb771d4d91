//! Test images and palettes.

use pixel_dither::{Palette, Rgb};

/// Image dimensions used by the generated fixtures
pub const WIDTH: usize = 24;
pub const HEIGHT: usize = 16;

/// Black and white
pub fn black_white() -> Palette {
    Palette::new(vec![Rgb::gray(0), Rgb::gray(255)]).unwrap()
}

/// A small pixel-art palette
pub fn retro_palette() -> Palette {
    Palette::from_hex(&[
        "#1a1c2c", "#5d275d", "#b13e53", "#ef7d57", "#ffcd75", "#a7f070", "#38b764", "#257179",
    ])
    .unwrap()
}

/// Smooth RGB gradient, fully opaque.
pub fn gradient() -> Vec<u8> {
    let mut pixels = Vec::with_capacity(WIDTH * HEIGHT * 4);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let r = (x * 255 / (WIDTH - 1)) as u8;
            let g = (y * 255 / (HEIGHT - 1)) as u8;
            let b = 255 - r / 2 - g / 2;
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}

/// Sprite-like image: an opaque colored disc on a transparent background.
pub fn sprite() -> Vec<u8> {
    let (cx, cy, radius) = (WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0, 6.5f32);
    let mut pixels = Vec::with_capacity(WIDTH * HEIGHT * 4);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let (dx, dy) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
            if dx * dx + dy * dy <= radius * radius {
                pixels.extend_from_slice(&[200, (x * 10) as u8, 40, 255]);
            } else {
                pixels.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }
    pixels
}

/// Flat gray image of the fixture dimensions.
pub fn flat_gray(value: u8) -> Vec<u8> {
    [value, value, value, 255].repeat(WIDTH * HEIGHT)
}
