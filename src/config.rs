//! Serializable pipeline configuration.
//!
//! A [`QuantizeConfig`] describes one quantization run: how many colors to
//! generate (or which fixed palette to use), the dither algorithm and its
//! strength, and what to do when the fixed palette is unusable. It loads
//! from YAML or JSON and feeds [`Quantizer::from_config`](crate::Quantizer::from_config).
//!
//! ```yaml
//! colors: 8
//! dither: bayer
//! strength: 50
//! ```

use serde::{Deserialize, Serialize};

use crate::dither::DitherAlgorithm;
use crate::error::QuantizeError;

/// What to do when a fixed palette cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidPaletteMode {
    /// Fail with [`QuantizeError::Palette`].
    #[default]
    Strict,

    /// Log a warning and return the input pixels unchanged.
    Passthrough,
}

/// Quantization settings loaded from YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantizeConfig {
    /// Number of palette colors to generate. Fractions are truncated and
    /// the result clamped to 1..=256.
    #[serde(default = "default_colors")]
    pub colors: f64,

    /// Fixed palette as hex strings. Overrides palette generation.
    #[serde(default)]
    pub palette: Option<Vec<String>>,

    /// Dither algorithm
    #[serde(default)]
    pub dither: DitherAlgorithm,

    /// Bayer dither strength, 0 to 100
    #[serde(default = "default_strength")]
    pub strength: f32,

    /// What to do when the fixed palette is empty or malformed
    #[serde(default)]
    pub on_invalid_palette: InvalidPaletteMode,
}

fn default_colors() -> f64 {
    16.0
}

fn default_strength() -> f32 {
    100.0
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            palette: None,
            dither: DitherAlgorithm::default(),
            strength: default_strength(),
            on_invalid_palette: InvalidPaletteMode::default(),
        }
    }
}

impl QuantizeConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, QuantizeError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            tracing::warn!(%e, "Failed to parse YAML config");
            QuantizeError::Config(e.to_string())
        })?;
        config.log_loaded();
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, QuantizeError> {
        let config: Self = serde_json::from_str(content).map_err(|e| {
            tracing::warn!(%e, "Failed to parse JSON config");
            QuantizeError::Config(e.to_string())
        })?;
        config.log_loaded();
        Ok(config)
    }

    fn log_loaded(&self) {
        tracing::info!(
            colors = self.colors,
            fixed_palette = self.palette.as_ref().map(Vec::len),
            dither = ?self.dither,
            strength = self.strength,
            "Loaded quantize configuration"
        );
    }
}
