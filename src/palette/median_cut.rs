//! Median-cut palette generation.
//!
//! Opaque pixels are gathered into one bucket, which is split repeatedly
//! along its widest color channel until the requested number of buckets
//! exists or nothing splittable remains. Each bucket then contributes its
//! mean color to the palette.

use crate::buffer::{self, CHANNELS};
use crate::color::Rgb;
use crate::error::{QuantizeError, MAX_PALETTE_SIZE};

use super::palette::Palette;

/// Pixels with alpha above this value take part in palette generation.
pub const OPACITY_THRESHOLD: u8 = 128;

/// Upper bound on the number of colors fed to median cut.
pub const MAX_SAMPLES: usize = 65_536;

/// Clamp a requested color count to `1..=256`, truncating fractions toward zero.
///
/// NaN requests one color.
///
/// ```
/// use pixel_dither::clamp_color_count;
///
/// assert_eq!(clamp_color_count(12.9), 12);
/// assert_eq!(clamp_color_count(0.0), 1);
/// assert_eq!(clamp_color_count(1000.0), 256);
/// ```
pub fn clamp_color_count(requested: f64) -> usize {
    if requested.is_nan() {
        return 1;
    }
    requested.trunc().clamp(1.0, MAX_PALETTE_SIZE as f64) as usize
}

/// A set of colors awaiting a split, with its widest channel precomputed.
#[derive(Debug)]
struct Bucket {
    colors: Vec<Rgb>,
    /// Channel (0 = R, 1 = G, 2 = B) with the largest max - min spread
    channel: usize,
    /// Spread of `channel`
    range: u8,
}

impl Bucket {
    fn new(colors: Vec<Rgb>) -> Self {
        let mut channel = 0;
        let mut range = 0;

        // R, G, B order; only a strictly wider channel replaces the current one
        for c in 0..3 {
            let (min, max) = colors.iter().fold((u8::MAX, u8::MIN), |(lo, hi), color| {
                let v = color.channel(c);
                (lo.min(v), hi.max(v))
            });
            let spread = max.saturating_sub(min);
            if spread > range {
                range = spread;
                channel = c;
            }
        }

        Self {
            colors,
            channel,
            range,
        }
    }

    /// Whether this bucket can be split into two distinct halves.
    #[inline]
    fn splittable(&self) -> bool {
        self.colors.len() > 1 && self.range > 0
    }

    /// Sort by the widest channel and cut at the midpoint index.
    fn split(mut self) -> (Bucket, Bucket) {
        let channel = self.channel;
        // Stable sort keeps the split reproducible for equal keys
        self.colors.sort_by_key(|color| color.channel(channel));
        let upper = self.colors.split_off(self.colors.len() / 2);
        (Bucket::new(self.colors), Bucket::new(upper))
    }

    fn average(&self) -> Rgb {
        let mut sum = [0u64; 3];
        for color in &self.colors {
            sum[0] += color.r as u64;
            sum[1] += color.g as u64;
            sum[2] += color.b as u64;
        }
        let n = self.colors.len().max(1) as f64;
        let mean = |s: u64| (s as f64 / n).round() as u8;
        Rgb::new(mean(sum[0]), mean(sum[1]), mean(sum[2]))
    }
}

/// Index of the bucket to split next: the widest range wins, and on equal
/// ranges the earlier bucket wins.
fn widest_bucket(buckets: &[Bucket]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (i, bucket) in buckets.iter().enumerate() {
        if !bucket.splittable() {
            continue;
        }
        if best.map_or(true, |(_, range)| bucket.range > range) {
            best = Some((i, bucket.range));
        }
    }
    best.map(|(i, _)| i)
}

/// Generate a palette of exactly `num_colors` colors from an RGBA buffer.
///
/// `num_colors` is clamped to `1..=256`. Only pixels with alpha above 128 are
/// considered. An image with no such pixels yields an evenly spaced grayscale
/// ramp. When the image has fewer distinct colors than requested, the last
/// generated color is repeated to fill the palette.
///
/// The result depends only on the input: identical buffers always produce
/// identical palettes.
///
/// # Errors
///
/// [`QuantizeError::InvalidBufferLength`] if `pixels.len()` is not a multiple
/// of 4.
///
/// # Example
///
/// ```
/// use pixel_dither::{generate_palette, Rgb};
///
/// let pixels = [255, 0, 0, 255].repeat(4);
/// let palette = generate_palette(&pixels, 1).unwrap();
/// assert_eq!(palette.colors(), &[Rgb::new(255, 0, 0)]);
/// ```
pub fn generate_palette(pixels: &[u8], num_colors: usize) -> Result<Palette, QuantizeError> {
    buffer::check_len(pixels)?;
    let num_colors = num_colors.clamp(1, MAX_PALETTE_SIZE);

    let candidates: Vec<Rgb> = pixels
        .chunks_exact(CHANNELS)
        .filter(|px| px[3] > OPACITY_THRESHOLD)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            colors = num_colors,
            "No opaque pixels, using grayscale ramp palette"
        );
        return Ok(Palette::grayscale_ramp(num_colors));
    }

    let candidate_count = candidates.len();
    let step = (candidate_count / MAX_SAMPLES).max(1);
    let samples: Vec<Rgb> = candidates
        .into_iter()
        .step_by(step)
        .take(MAX_SAMPLES)
        .collect();
    let sample_count = samples.len();

    let mut buckets = vec![Bucket::new(samples)];
    while buckets.len() < num_colors {
        let Some(idx) = widest_bucket(&buckets) else {
            tracing::debug!(
                buckets = buckets.len(),
                requested = num_colors,
                "Median cut stopped early, no splittable bucket left"
            );
            break;
        };
        let (lower, upper) = buckets.remove(idx).split();
        buckets.insert(idx, upper);
        buckets.insert(idx, lower);
    }

    let mut colors: Vec<Rgb> = buckets.iter().map(Bucket::average).collect();
    let bucket_count = colors.len();
    let filler = colors.last().copied().unwrap_or(Rgb::BLACK);
    colors.resize(num_colors, filler);

    tracing::debug!(
        candidates = candidate_count,
        sampled = sample_count,
        buckets = bucket_count,
        colors = num_colors,
        "Generated median-cut palette"
    );

    Ok(Palette::new(colors)?)
}
