//! Reproducible description of one generated field.
//!
//! A [`FieldConfig`] captures everything needed to recreate a field: output
//! size, base cell size, PRNG seed, and octave layout.

use crate::error::NoiseError;
use crate::fractal::OctaveParams;
use serde::{Deserialize, Serialize};

/// Reproducible description of one generated field.
///
/// Two identical `FieldConfig` values produce bit-identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Pixels per grid cell at the base octave.
    pub cell_size: f64,
    /// Seed for the gradient grid.
    pub seed: u64,
    /// Octave layout.
    pub octaves: OctaveParams,
}

impl FieldConfig {
    /// Creates a config with the default five-octave layout.
    pub fn new(width: usize, height: usize, cell_size: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            cell_size,
            seed,
            octaves: OctaveParams::default(),
        }
    }

    /// Replaces the octave layout (builder style).
    pub fn with_octaves(mut self, octaves: OctaveParams) -> Self {
        self.octaves = octaves;
        self
    }

    /// Validates output size, cell size, and octave params.
    ///
    /// Returns `NoiseError::InvalidConfiguration` describing the first problem.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidConfiguration(format!(
                "output size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        self.width.checked_mul(self.height).ok_or_else(|| {
            NoiseError::InvalidConfiguration(format!(
                "output size {}x{} overflows",
                self.width, self.height
            ))
        })?;
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(NoiseError::InvalidConfiguration(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        self.octaves.validate()
    }
}
