//! Multi-octave (fractal) composition of gradient noise.
//!
//! Each octave samples the same gradient grid at a higher frequency and a lower
//! amplitude. The weighted sum is divided by the sum of amplitudes so the
//! result stays in the single-octave range whatever the octave count.

use crate::error::NoiseError;
use crate::grid::GradientGrid;
use crate::params::{param_f64, param_usize};
use crate::sampler::sample;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default number of octaves.
const DEFAULT_OCTAVES: u32 = 5;
/// Default per-octave amplitude decay.
const DEFAULT_PERSISTENCE: f64 = 0.5;
/// Default per-octave frequency growth.
const DEFAULT_FREQUENCY_MULTIPLIER: f64 = 2.0;

/// Octave layout for one field generation.
///
/// [`Default`] is five octaves halving in amplitude and doubling in frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Number of octaves, at least 1.
    pub octave_count: u32,
    /// Amplitude decay per octave, in (0, 1].
    pub persistence: f64,
    /// Frequency growth per octave, greater than 1.
    pub frequency_multiplier: f64,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octave_count: DEFAULT_OCTAVES,
            persistence: DEFAULT_PERSISTENCE,
            frequency_multiplier: DEFAULT_FREQUENCY_MULTIPLIER,
        }
    }
}

impl OctaveParams {
    /// One octave: composition reduces to a plain [`sample`].
    pub fn single() -> Self {
        Self {
            octave_count: 1,
            ..Self::default()
        }
    }

    /// Overrides fields of `base` with `octaves`, `persistence`, and
    /// `frequency_multiplier` from a JSON object. Missing or mistyped keys keep
    /// the base value.
    pub fn from_json(params: &Value, base: OctaveParams) -> Self {
        let octave_count = param_usize(params, "octaves", base.octave_count as usize);
        Self {
            octave_count: u32::try_from(octave_count).unwrap_or(u32::MAX),
            persistence: param_f64(params, "persistence", base.persistence),
            frequency_multiplier: param_f64(
                params,
                "frequency_multiplier",
                base.frequency_multiplier,
            ),
        }
    }

    /// Checks every field against its valid domain.
    ///
    /// Returns `NoiseError::InvalidConfiguration` naming the offending field.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octave_count < 1 {
            return Err(NoiseError::InvalidConfiguration(
                "octave_count must be at least 1".into(),
            ));
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(NoiseError::InvalidConfiguration(format!(
                "persistence must be in (0, 1], got {}",
                self.persistence
            )));
        }
        if !(self.frequency_multiplier.is_finite() && self.frequency_multiplier > 1.0) {
            return Err(NoiseError::InvalidConfiguration(format!(
                "frequency_multiplier must be greater than 1, got {}",
                self.frequency_multiplier
            )));
        }
        Ok(())
    }

    /// Sum of all octave amplitudes, the divisor used by [`compose_fractal`].
    pub fn amplitude_sum(&self) -> f64 {
        let (sum, _) = (0..self.octave_count).fold((0.0, 1.0), |(sum, amplitude), _| {
            (sum + amplitude, amplitude * self.persistence)
        });
        sum
    }

    /// Frequency of the last octave, accumulated the same way
    /// [`compose_fractal`] accumulates it.
    pub fn highest_frequency(&self) -> f64 {
        let mut frequency = 1.0_f64;
        for _ in 1..self.octave_count {
            frequency *= self.frequency_multiplier;
            if frequency.is_infinite() {
                break;
            }
        }
        frequency
    }
}

/// Samples fractal noise at `(x, y)` in grid space, normalized to [-1, 1].
///
/// Returns `NoiseError::InvalidConfiguration` for malformed octave params and
/// `NoiseError::OutOfBounds` if the highest octave leaves the grid.
pub fn compose_fractal(
    x: f64,
    y: f64,
    grid: &GradientGrid,
    octaves: &OctaveParams,
) -> Result<f64, NoiseError> {
    octaves.validate()?;

    let mut total = 0.0;
    let mut frequency = 1.0;
    let mut amplitude = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves.octave_count {
        total += sample(x * frequency, y * frequency, grid)? * amplitude;
        max_value += amplitude;
        amplitude *= octaves.persistence;
        frequency *= octaves.frequency_multiplier;
    }

    Ok(total / max_value)
}
