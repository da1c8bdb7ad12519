//! Error types for the perlin-field core.

use thiserror::Error;

/// Errors produced by grid construction, sampling, and field generation.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// A gradient grid was smaller than 2x2, a field had a zero dimension,
    /// or `width * height` overflowed.
    #[error("invalid dimensions {width}x{height}: gradient grids need at least 2x2 vertices and fields at least 1x1")]
    InvalidDimension { width: usize, height: usize },

    /// Cell size, output size, or octave parameters were outside their valid domain.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A vertex index fell outside the gradient grid.
    ///
    /// Under the generator's sizing this cannot happen; seeing it means the
    /// grid was sized for a different coordinate range than was sampled.
    #[error("vertex ({x}, {y}) out of bounds for grid of size ({width}, {height})")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    /// A query coordinate was NaN or infinite.
    #[error("non-finite sample coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// A data buffer did not match the declared field dimensions.
    #[error("dimension mismatch: ({lhs_w}, {lhs_h}) vs ({rhs_w}, {rhs_h})")]
    DimensionMismatch {
        lhs_w: usize,
        lhs_h: usize,
        rhs_w: usize,
        rhs_h: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given bands.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// A preset name was not recognized.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Writing a snapshot failed.
    #[error("I/O error: {0}")]
    Io(String),
}
