//! Lattice of random unit gradients, one per integer vertex.
//!
//! The grid is built once from a seed and never mutated. Gradients are stored
//! in a single row-major `Vec` addressed by `iy * width + ix`.

use crate::error::NoiseError;
use crate::prng::Xorshift64;
use glam::DVec2;
use log::debug;

/// Smallest grid edge: a cell needs a vertex on each side.
pub const MIN_GRID_EDGE: usize = 2;

/// Immutable 2D array of unit-length gradient vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientGrid {
    width: usize,
    height: usize,
    gradients: Vec<DVec2>,
}

impl GradientGrid {
    /// Builds a grid from a seed.
    ///
    /// The generator lives only for the duration of this call, so the same
    /// seed and dimensions always reproduce the same grid.
    pub fn build(seed: u64, width: usize, height: usize) -> Result<Self, NoiseError> {
        let mut rng = Xorshift64::new(seed);
        Self::from_rng(&mut rng, width, height)
    }

    /// Builds a grid by drawing one angle per vertex from `rng`, rows first.
    ///
    /// Returns `NoiseError::InvalidDimension` if either edge is below 2 or
    /// the vertex count overflows `usize`.
    pub fn from_rng(rng: &mut Xorshift64, width: usize, height: usize) -> Result<Self, NoiseError> {
        if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
            return Err(NoiseError::InvalidDimension { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(NoiseError::InvalidDimension { width, height })?;

        // y outer, x inner: the draw order is part of the reproducibility contract.
        let gradients: Vec<DVec2> = (0..len).map(|_| DVec2::from_angle(rng.next_angle())).collect();

        debug!("built {width}x{height} gradient grid ({len} vertices)");
        Ok(Self {
            width,
            height,
            gradients,
        })
    }

    /// Number of vertex columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of vertex rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of vertices.
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Always false for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }

    /// Returns the gradient stored at vertex `(ix, iy)`.
    ///
    /// Returns `NoiseError::OutOfBounds` if the vertex lies outside
    /// `[0, width) x [0, height)`.
    pub fn gradient_at(&self, ix: i64, iy: i64) -> Result<DVec2, NoiseError> {
        let out_of_bounds = || NoiseError::OutOfBounds {
            x: ix,
            y: iy,
            width: self.width,
            height: self.height,
        };
        let x = usize::try_from(ix).map_err(|_| out_of_bounds())?;
        let y = usize::try_from(iy).map_err(|_| out_of_bounds())?;
        if x >= self.width || y >= self.height {
            return Err(out_of_bounds());
        }
        Ok(self.gradients[y * self.width + x])
    }
}
