//! Mapping from normalized field values to colors.
//!
//! Two mappings are provided: a direct grayscale ramp and a banded palette
//! that buckets values at ascending thresholds. Bands are plain data so that
//! callers can supply their own thresholds and colors.

use crate::color::Srgb;
use perlin_field_core::NoiseError;
use serde::{Deserialize, Serialize};

/// Names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["terrain", "grayscale"];

/// Colors indexed by threshold bands.
///
/// `colors[i]` covers values below `thresholds[i]` (and at or above the
/// previous threshold); the last color covers everything from the last
/// threshold up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandPalette {
    thresholds: Vec<f64>,
    colors: Vec<Srgb>,
}

impl BandPalette {
    /// Creates a banded palette.
    ///
    /// Requires strictly ascending finite thresholds inside [0, 1] and exactly
    /// one more color than thresholds. Returns `NoiseError::InvalidPalette`
    /// otherwise.
    pub fn new(thresholds: Vec<f64>, colors: Vec<Srgb>) -> Result<Self, NoiseError> {
        let palette = Self { thresholds, colors };
        palette.validate()?;
        Ok(palette)
    }

    /// Parses `{"thresholds": [...], "colors": ["#rrggbb", ...]}` and validates it.
    pub fn from_json(json: &str) -> Result<Self, NoiseError> {
        let palette: BandPalette = serde_json::from_str(json)
            .map_err(|e| NoiseError::InvalidPalette(format!("malformed bands: {e}")))?;
        palette.validate()?;
        Ok(palette)
    }

    fn validate(&self) -> Result<(), NoiseError> {
        if self.colors.len() != self.thresholds.len() + 1 {
            return Err(NoiseError::InvalidPalette(format!(
                "{} thresholds need {} colors, got {}",
                self.thresholds.len(),
                self.thresholds.len() + 1,
                self.colors.len()
            )));
        }
        if let Some(t) = self
            .thresholds
            .iter()
            .find(|t| !(t.is_finite() && (0.0..=1.0).contains(*t)))
        {
            return Err(NoiseError::InvalidPalette(format!(
                "threshold {t} outside [0, 1]"
            )));
        }
        if self.thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(NoiseError::InvalidPalette(
                "thresholds must be strictly ascending".into(),
            ));
        }
        Ok(())
    }

    /// Six-band terrain: deep lake, marsh, grassland, forest, rock, snow.
    pub fn terrain() -> Self {
        Self {
            thresholds: vec![0.3, 0.4, 0.5, 0.65, 0.8],
            colors: vec![
                Srgb::from_rgb8(20, 40, 100),
                Srgb::from_rgb8(60, 100, 100),
                Srgb::from_rgb8(100, 180, 100),
                Srgb::from_rgb8(40, 100, 40),
                Srgb::from_rgb8(100, 80, 50),
                Srgb::from_rgb8(220, 220, 220),
            ],
        }
    }

    /// Band boundaries, ascending.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Band colors, one more than thresholds.
    pub fn colors(&self) -> &[Srgb] {
        &self.colors
    }

    /// Color of the band containing `t`. NaN falls in the first band.
    pub fn sample(&self, t: f64) -> Srgb {
        let band = self.thresholds.partition_point(|&threshold| t >= threshold);
        self.colors[band]
    }
}

/// How field values become colors.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// Gray level `round(t * 255)` on every channel.
    Grayscale,
    /// Threshold buckets.
    Banded(BandPalette),
}

impl Palette {
    /// Looks up a built-in palette by name.
    ///
    /// Returns `NoiseError::InvalidPalette` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "terrain" => Ok(Palette::Banded(BandPalette::terrain())),
            "grayscale" => Ok(Palette::Grayscale),
            _ => Err(NoiseError::InvalidPalette(format!(
                "unknown palette '{name}' (expected one of: {})",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// Names of all built-in palettes.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Color for a field value in [0, 1].
    pub fn sample(&self, t: f64) -> Srgb {
        match self {
            Palette::Grayscale => Srgb::gray(t),
            Palette::Banded(bands) => bands.sample(t),
        }
    }
}
