//! Single-octave gradient noise.
//!
//! A query point falls inside one grid cell. Each of the cell's four corners
//! contributes the dot product of its gradient with the displacement from the
//! corner to the point, and the four contributions are blended bilinearly with
//! quintic-eased weights.

use crate::error::NoiseError;
use crate::grid::GradientGrid;
use glam::DVec2;

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, which hides the cell edges.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation `a + t(b - a)`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the gradient at `(ix, iy)` with the displacement from that
/// vertex to `(x, y)`.
pub fn dot_grid_gradient(
    ix: i64,
    iy: i64,
    x: f64,
    y: f64,
    grid: &GradientGrid,
) -> Result<f64, NoiseError> {
    let gradient = grid.gradient_at(ix, iy)?;
    let offset = DVec2::new(x - ix as f64, y - iy as f64);
    Ok(offset.dot(gradient))
}

/// Samples gradient noise at `(x, y)` in grid space.
///
/// Output is nominally in [-1, 1]. The enclosing cell's far corner
/// `(floor(x) + 1, floor(y) + 1)` must exist in `grid`, otherwise this returns
/// `NoiseError::OutOfBounds`. Non-finite coordinates return
/// `NoiseError::NonFiniteCoordinate`.
pub fn sample(x: f64, y: f64, grid: &GradientGrid) -> Result<f64, NoiseError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(NoiseError::NonFiniteCoordinate { x, y });
    }

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let sx = fade(x - x0 as f64);
    let sy = fade(y - y0 as f64);

    let n0 = dot_grid_gradient(x0, y0, x, y, grid)?;
    let n1 = dot_grid_gradient(x1, y0, x, y, grid)?;
    let ix0 = lerp(n0, n1, sx);

    let n2 = dot_grid_gradient(x0, y1, x, y, grid)?;
    let n3 = dot_grid_gradient(x1, y1, x, y, grid)?;
    let ix1 = lerp(n2, n3, sx);

    Ok(lerp(ix0, ix1, sy))
}
