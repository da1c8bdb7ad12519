#![deny(unsafe_code)]
//! Headless renderer for perlin-field: palettes, RGBA conversion, PNG
//! snapshots, and the named preset registry.
//!
//! This crate sits between `perlin-field-core` (which only produces scalar
//! fields) and front ends such as the CLI. Presets bundle a [`FieldConfig`]
//! with a [`Palette`] so front ends do not duplicate that wiring.

pub mod color;
pub mod palette;
pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use color::Srgb;
pub use palette::{BandPalette, Palette};

use perlin_field_core::params::param_f64;
use perlin_field_core::{FieldConfig, FieldGenerator, NoiseError, OctaveParams};
use serde_json::{json, Value};

/// All available preset names.
const PRESET_NAMES: &[&str] = &["terrain", "terrain-single", "grayscale", "grayscale-fractal"];

/// Default output width in pixels.
pub const DEFAULT_WIDTH: usize = 1280;
/// Default output height in pixels.
pub const DEFAULT_HEIGHT: usize = 720;
/// Default gradient grid seed.
pub const DEFAULT_SEED: u64 = 1234;
/// Default pixels per base-octave cell.
const DEFAULT_CELL_SIZE: f64 = 40.0;

/// The built-in noise/palette combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    /// Five-octave fractal noise through the terrain bands.
    Terrain,
    /// Single-octave noise through the terrain bands.
    TerrainSingle,
    /// Single-octave noise as gray levels.
    Grayscale,
    /// Five-octave fractal noise as gray levels.
    GrayscaleFractal,
}

impl PresetKind {
    fn from_name(name: &str) -> Result<Self, NoiseError> {
        match name {
            "terrain" => Ok(PresetKind::Terrain),
            "terrain-single" => Ok(PresetKind::TerrainSingle),
            "grayscale" => Ok(PresetKind::Grayscale),
            "grayscale-fractal" => Ok(PresetKind::GrayscaleFractal),
            _ => Err(NoiseError::UnknownPreset(name.to_string())),
        }
    }

    /// Registry name of this preset.
    pub fn name(self) -> &'static str {
        match self {
            PresetKind::Terrain => "terrain",
            PresetKind::TerrainSingle => "terrain-single",
            PresetKind::Grayscale => "grayscale",
            PresetKind::GrayscaleFractal => "grayscale-fractal",
        }
    }

    fn octaves(self) -> OctaveParams {
        match self {
            PresetKind::Terrain | PresetKind::GrayscaleFractal => OctaveParams::default(),
            PresetKind::TerrainSingle | PresetKind::Grayscale => OctaveParams::single(),
        }
    }

    fn palette(self) -> Palette {
        match self {
            PresetKind::Terrain | PresetKind::TerrainSingle => {
                Palette::Banded(BandPalette::terrain())
            }
            PresetKind::Grayscale | PresetKind::GrayscaleFractal => Palette::Grayscale,
        }
    }
}

/// A ready-to-render combination of field config and palette.
///
/// Use [`Preset::from_name`] for string-based construction (CLI).
#[derive(Debug, Clone)]
pub struct Preset {
    kind: PresetKind,
    config: FieldConfig,
    palette: Palette,
}

impl Preset {
    /// Constructs a preset by name, applying JSON overrides.
    ///
    /// Recognized override keys are `cell_size`, `octaves`, `persistence`,
    /// and `frequency_multiplier`; anything else is ignored. Returns
    /// `NoiseError::UnknownPreset` for unknown names and
    /// `NoiseError::InvalidConfiguration` if the resulting config is invalid.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, NoiseError> {
        let kind = PresetKind::from_name(name)?;
        let config = FieldConfig {
            width,
            height,
            cell_size: param_f64(params, "cell_size", DEFAULT_CELL_SIZE),
            seed,
            octaves: OctaveParams::from_json(params, kind.octaves()),
        };
        config.validate()?;
        Ok(Self {
            kind,
            config,
            palette: kind.palette(),
        })
    }

    /// Returns a slice of all recognized preset names.
    pub fn list_presets() -> &'static [&'static str] {
        PRESET_NAMES
    }

    /// Schema of the JSON override keys accepted by [`Preset::from_name`].
    pub fn param_schema() -> Value {
        json!({
            "cell_size": {
                "type": "number",
                "default": DEFAULT_CELL_SIZE,
                "description": "Pixels per grid cell at the base octave"
            },
            "octaves": {
                "type": "integer",
                "min": 1,
                "description": "Number of octaves (5 for fractal presets, 1 otherwise)"
            },
            "persistence": {
                "type": "number",
                "default": OctaveParams::default().persistence,
                "min": 0.0,
                "max": 1.0,
                "description": "Amplitude decay per octave"
            },
            "frequency_multiplier": {
                "type": "number",
                "default": OctaveParams::default().frequency_multiplier,
                "min": 1.0,
                "description": "Frequency growth per octave"
            }
        })
    }

    /// Which built-in preset this is.
    pub fn kind(&self) -> PresetKind {
        self.kind
    }

    /// The field config this preset renders.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The palette this preset renders with.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replaces the palette (builder style).
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Builds the generator for this preset's config.
    pub fn generator(&self) -> Result<FieldGenerator, NoiseError> {
        FieldGenerator::new(self.config)
    }
}
