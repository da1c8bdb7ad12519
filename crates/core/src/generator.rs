//! Full-field generation: grid sizing, per-pixel evaluation, and remapping.
//!
//! Pixel `(px, py)` maps to grid space as `(px / cell_size, py / cell_size)`.
//! Octave `i` samples at that point times `frequency_multiplier^i`, so the
//! grid is sized for the highest octave plus one vertex of margin per side.

use crate::config::FieldConfig;
use crate::error::NoiseError;
use crate::field::ScalarField;
use crate::fractal::{compose_fractal, OctaveParams};
use crate::grid::GradientGrid;
use crate::sampler::sample;
use log::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Upper bound on gradient grid vertices (16 bytes each).
pub const MAX_GRID_VERTICES: usize = 1 << 26;

/// Vertices added to each grid edge beyond the scaled cell count.
const GRID_MARGIN: usize = 2;

/// Computes the gradient grid size needed to cover a `width` x `height` output.
///
/// Each edge is `ceil(pixels / cell_size) * ceil(highest_frequency) + 2`; for
/// the canonical multiplier of 2 that factor is `2^(octave_count - 1)`.
///
/// Returns `NoiseError::InvalidConfiguration` if any input is outside its
/// domain or the grid would exceed [`MAX_GRID_VERTICES`].
pub fn grid_dimensions(
    width: usize,
    height: usize,
    cell_size: f64,
    octaves: &OctaveParams,
) -> Result<(usize, usize), NoiseError> {
    FieldConfig {
        width,
        height,
        cell_size,
        seed: 0,
        octaves: *octaves,
    }
    .validate()?;

    let factor = octaves.highest_frequency().ceil();
    let grid_width = grid_edge(width, cell_size, factor)?;
    let grid_height = grid_edge(height, cell_size, factor)?;

    let vertices = grid_width
        .checked_mul(grid_height)
        .filter(|&n| n <= MAX_GRID_VERTICES)
        .ok_or_else(|| {
            NoiseError::InvalidConfiguration(format!(
                "gradient grid {grid_width}x{grid_height} exceeds {MAX_GRID_VERTICES} vertices"
            ))
        })?;
    trace!(
        "{width}x{height} px at cell {cell_size}, {} octaves -> grid {grid_width}x{grid_height} ({vertices} vertices)",
        octaves.octave_count
    );
    Ok((grid_width, grid_height))
}

fn grid_edge(pixels: usize, cell_size: f64, factor: f64) -> Result<usize, NoiseError> {
    let scaled = (pixels as f64 / cell_size).ceil() * factor;
    if !scaled.is_finite() || scaled > MAX_GRID_VERTICES as f64 {
        return Err(NoiseError::InvalidConfiguration(format!(
            "gradient grid edge for {pixels} px at cell size {cell_size} is too large"
        )));
    }
    Ok(scaled as usize + GRID_MARGIN)
}

/// Generates a field in one call.
///
/// Equivalent to building a [`FieldGenerator`] and calling
/// [`FieldGenerator::generate`].
pub fn generate_field(
    width: usize,
    height: usize,
    cell_size: f64,
    seed: u64,
    octaves: &OctaveParams,
) -> Result<ScalarField, NoiseError> {
    FieldGenerator::new(FieldConfig {
        width,
        height,
        cell_size,
        seed,
        octaves: *octaves,
    })?
    .generate()
}

/// Maps noise in [-1, 1] to [0, 1].
#[inline]
fn to_unit(n: f64) -> f64 {
    ((n + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Owns a validated config and the gradient grid built for it.
///
/// The grid is built once in [`FieldGenerator::new`] and only read afterwards,
/// so one generator can produce any number of identical fields.
#[derive(Debug, Clone)]
pub struct FieldGenerator {
    config: FieldConfig,
    grid: GradientGrid,
}

impl FieldGenerator {
    /// Validates `config`, sizes the grid, and builds it from `config.seed`.
    pub fn new(config: FieldConfig) -> Result<Self, NoiseError> {
        let (grid_width, grid_height) = grid_dimensions(
            config.width,
            config.height,
            config.cell_size,
            &config.octaves,
        )?;
        let grid = GradientGrid::build(config.seed, grid_width, grid_height)?;
        Ok(Self { config, grid })
    }

    /// The config this generator was built from.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The read-only gradient grid.
    pub fn grid(&self) -> &GradientGrid {
        &self.grid
    }

    /// Evaluates the remapped value of output pixel `(px, py)`.
    ///
    /// A single octave goes straight to [`sample`]; more go through
    /// [`compose_fractal`].
    pub fn sample_pixel(&self, px: usize, py: usize) -> Result<f64, NoiseError> {
        let x = px as f64 / self.config.cell_size;
        let y = py as f64 / self.config.cell_size;
        let n = if self.config.octaves.octave_count == 1 {
            sample(x, y, &self.grid)?
        } else {
            compose_fractal(x, y, &self.grid, &self.config.octaves)?
        };
        Ok(to_unit(n))
    }

    fn fill_row(&self, py: usize, row: &mut [f64]) -> Result<(), NoiseError> {
        row.iter_mut().enumerate().try_for_each(|(px, out)| {
            *out = self.sample_pixel(px, py)?;
            Ok(())
        })
    }

    /// Evaluates every pixel on the calling thread.
    pub fn generate(&self) -> Result<ScalarField, NoiseError> {
        let FieldConfig { width, height, .. } = self.config;
        debug!(
            "generating {width}x{height} field (seed {}, {} octaves)",
            self.config.seed, self.config.octaves.octave_count
        );
        let mut data = vec![0.0; width * height];
        data.chunks_mut(width)
            .enumerate()
            .try_for_each(|(py, row)| self.fill_row(py, row))?;
        ScalarField::from_data(width, height, data)
    }

    /// Evaluates rows in parallel on the rayon pool.
    ///
    /// Rows are disjoint slices and every pixel depends only on the shared
    /// grid, so the result is bit-identical to [`FieldGenerator::generate`].
    #[cfg(feature = "parallel")]
    pub fn generate_par(&self) -> Result<ScalarField, NoiseError> {
        let FieldConfig { width, height, .. } = self.config;
        debug!(
            "generating {width}x{height} field in parallel (seed {}, {} octaves)",
            self.config.seed, self.config.octaves.octave_count
        );
        let mut data = vec![0.0; width * height];
        data.par_chunks_mut(width)
            .enumerate()
            .try_for_each(|(py, row)| self.fill_row(py, row))?;
        ScalarField::from_data(width, height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_octaves() -> OctaveParams {
        OctaveParams::default()
    }

    // -- grid_dimensions --

    #[test]
    fn single_octave_grid_covers_cells_plus_margin() {
        let dims = grid_dimensions(40, 40, 40.0, &OctaveParams::single()).unwrap();
        assert_eq!(dims, (3, 3));
    }

    #[test]
    fn five_octave_grid_scales_by_sixteen() {
        // 1280 / 40 = 32, 720 / 40 = 18, both times 2^4, plus 2.
        let dims = grid_dimensions(1280, 720, 40.0, &five_octaves()).unwrap();
        assert_eq!(dims, (32 * 16 + 2, 18 * 16 + 2));
    }

    #[test]
    fn partial_cells_round_up() {
        let dims = grid_dimensions(41, 39, 40.0, &OctaveParams::single()).unwrap();
        assert_eq!(dims, (4, 3));
    }

    #[test]
    fn non_canonical_multiplier_scales_by_rounded_up_frequency() {
        let octaves = OctaveParams {
            octave_count: 3,
            persistence: 0.5,
            frequency_multiplier: 2.5,
        };
        // highest frequency 6.25 -> factor 7
        let dims = grid_dimensions(80, 40, 40.0, &octaves).unwrap();
        assert_eq!(dims, (2 * 7 + 2, 7 + 2));
    }

    #[test]
    fn grid_dimensions_reject_invalid_configuration() {
        let single = OctaveParams::single();
        assert!(grid_dimensions(0, 10, 4.0, &single).is_err());
        assert!(grid_dimensions(10, 0, 4.0, &single).is_err());
        assert!(grid_dimensions(10, 10, 0.0, &single).is_err());
        assert!(grid_dimensions(10, 10, -1.0, &single).is_err());
        let zero_octaves = OctaveParams {
            octave_count: 0,
            ..single
        };
        assert!(matches!(
            grid_dimensions(10, 10, 4.0, &zero_octaves),
            Err(NoiseError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn grid_dimensions_reject_oversized_grids() {
        let many = OctaveParams {
            octave_count: 40,
            ..OctaveParams::default()
        };
        assert!(matches!(
            grid_dimensions(1280, 720, 40.0, &many),
            Err(NoiseError::InvalidConfiguration(_))
        ));

        let absurd = OctaveParams {
            octave_count: u32::MAX,
            ..OctaveParams::default()
        };
        assert!(absurd.highest_frequency().is_infinite());
        assert!(grid_dimensions(64, 64, 8.0, &absurd).is_err());
    }

    // -- generate_field --

    #[test]
    fn generated_field_has_requested_dimensions() {
        let field = generate_field(64, 48, 16.0, 7, &five_octaves()).unwrap();
        assert_eq!(field.width(), 64);
        assert_eq!(field.height(), 48);
        assert_eq!(field.data().len(), 64 * 48);
    }

    #[test]
    fn single_octave_origin_is_exactly_one_half() {
        let config = FieldConfig::new(40, 40, 40.0, 1234).with_octaves(OctaveParams::single());
        let generator = FieldGenerator::new(config).unwrap();
        assert!(generator.grid().width() >= 3);
        assert!(generator.grid().height() >= 3);
        let field = generator.generate().unwrap();
        assert_eq!(field.get(0, 0).unwrap(), 0.5);
    }

    #[test]
    fn pixels_on_cell_corners_are_one_half_in_single_octave_mode() {
        let field = generate_field(81, 81, 20.0, 3, &OctaveParams::single()).unwrap();
        for &(x, y) in &[(0, 0), (20, 0), (40, 60), (80, 80)] {
            assert_eq!(field.get(x, y).unwrap(), 0.5, "at ({x}, {y})");
        }
    }

    #[test]
    fn single_octave_mode_matches_sampler() {
        let config = FieldConfig::new(30, 20, 8.0, 11).with_octaves(OctaveParams::single());
        let generator = FieldGenerator::new(config).unwrap();
        let field = generator.generate().unwrap();
        let n = sample(13.0 / 8.0, 7.0 / 8.0, generator.grid()).unwrap();
        assert_eq!(field.get(13, 7).unwrap(), (n + 1.0) / 2.0);
    }

    #[test]
    fn fractal_mode_matches_composer() {
        let generator = FieldGenerator::new(FieldConfig::new(30, 20, 8.0, 11)).unwrap();
        let field = generator.generate().unwrap();
        let n =
            compose_fractal(29.0 / 8.0, 19.0 / 8.0, generator.grid(), &five_octaves()).unwrap();
        assert_eq!(field.get(29, 19).unwrap(), (n + 1.0) / 2.0);
    }

    #[test]
    fn identical_inputs_produce_bit_identical_fields() {
        let a = generate_field(50, 30, 10.0, 42, &five_octaves()).unwrap();
        let b = generate_field(50, 30, 10.0, 42, &five_octaves()).unwrap();
        assert!(a
            .data()
            .iter()
            .zip(b.data())
            .all(|(va, vb)| va.to_bits() == vb.to_bits()));
    }

    #[test]
    fn different_seeds_produce_different_fields() {
        let a = generate_field(50, 30, 10.0, 1, &five_octaves()).unwrap();
        let b = generate_field(50, 30, 10.0, 2, &five_octaves()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generator_can_be_reused() {
        let generator = FieldGenerator::new(FieldConfig::new(16, 16, 4.0, 5)).unwrap();
        assert_eq!(generator.generate().unwrap(), generator.generate().unwrap());
        assert_eq!(generator.config().seed, 5);
    }

    #[test]
    fn generate_field_rejects_invalid_configuration() {
        assert!(matches!(
            generate_field(10, 10, 0.0, 1, &five_octaves()),
            Err(NoiseError::InvalidConfiguration(_))
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_generation_matches_sequential() {
        let generator = FieldGenerator::new(FieldConfig::new(97, 61, 12.5, 1234)).unwrap();
        let sequential = generator.generate().unwrap();
        let parallel = generator.generate_par().unwrap();
        assert!(sequential
            .data()
            .iter()
            .zip(parallel.data())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(48))]

            #[test]
            fn computed_grid_always_covers_the_output(
                seed: u64,
                width in 1_usize..=48,
                height in 1_usize..=48,
                cell_size in 2.0_f64..64.0,
                octave_count in 1_u32..=5,
                persistence in 0.05_f64..=1.0,
                frequency_multiplier in 1.01_f64..3.0,
            ) {
                let octaves = OctaveParams { octave_count, persistence, frequency_multiplier };
                let field = generate_field(width, height, cell_size, seed, &octaves);
                prop_assert!(field.is_ok(), "generation failed: {:?}", field.err());
                let field = field.unwrap();
                for &v in field.data() {
                    prop_assert!((0.0..=1.0).contains(&v), "value {v} outside [0, 1]");
                }
            }
        }
    }
}
