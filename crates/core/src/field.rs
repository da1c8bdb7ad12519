//! Two-dimensional scalar field of normalized noise values.
//!
//! A `ScalarField` stores `width * height` f64 values in [0, 1] in row-major
//! layout. It is the hand-off type between the generator and whatever maps
//! values to colors, so it exposes read access only.

use crate::error::NoiseError;

/// A finished 2D field of values in [0, 1], row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

impl ScalarField {
    /// Creates a field filled with `value`, clamped to [0, 1].
    ///
    /// Returns `NoiseError::InvalidDimension` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, value: f64) -> Result<Self, NoiseError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value.clamp(0.0, 1.0); len],
        })
    }

    /// Creates a field from a pre-built row-major buffer, validating that
    /// `data.len() == width * height`.
    ///
    /// Values are **not** clamped; the caller is responsible for ensuring
    /// they lie in [0, 1].
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, NoiseError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                lhs_w: width,
                lhs_h: height,
                rhs_w: data.len(),
                rhs_h: 1,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Field width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consumes the field and returns its row-major buffer.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Gets the value at `(x, y)`.
    ///
    /// Returns `NoiseError::OutOfBounds` outside `[0, width) x [0, height)`.
    pub fn get(&self, x: usize, y: usize) -> Result<f64, NoiseError> {
        if x >= self.width || y >= self.height {
            return Err(NoiseError::OutOfBounds {
                x: i64::try_from(x).unwrap_or(i64::MAX),
                y: i64::try_from(y).unwrap_or(i64::MAX),
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.data[y * self.width + x])
    }

    /// One row of the field.
    pub fn row(&self, y: usize) -> Option<&[f64]> {
        (y < self.height).then(|| &self.data[y * self.width..(y + 1) * self.width])
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Iterates over all cells yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data.iter().enumerate().map(|(i, &v)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, v)
        })
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, NoiseError> {
    if width == 0 || height == 0 {
        return Err(NoiseError::InvalidDimension { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(NoiseError::InvalidDimension { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_creates_correct_values() {
        let field = ScalarField::filled(3, 2, 0.7).unwrap();
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);
        assert_eq!(field.data().len(), 6);
        assert!(field.data().iter().all(|&v| v == 0.7));
    }

    #[test]
    fn filled_clamps_out_of_range_values() {
        let high = ScalarField::filled(2, 2, 1.5).unwrap();
        assert!(high.data().iter().all(|&v| v == 1.0));
        let low = ScalarField::filled(2, 2, -0.3).unwrap();
        assert!(low.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn filled_with_zero_dimension_returns_error() {
        assert!(matches!(
            ScalarField::filled(0, 3, 0.5),
            Err(NoiseError::InvalidDimension { .. })
        ));
        assert!(ScalarField::filled(3, 0, 0.5).is_err());
    }

    #[test]
    fn filled_with_overflow_dimensions_returns_error() {
        assert!(ScalarField::filled(usize::MAX, 2, 0.5).is_err());
    }

    #[test]
    fn from_data_creates_field_from_vec() {
        let data = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6];
        let field = ScalarField::from_data(3, 2, data).unwrap();
        assert_eq!(field.get(0, 0).unwrap(), 0.1);
        assert_eq!(field.get(2, 1).unwrap(), 0.6);
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let result = ScalarField::from_data(2, 2, vec![0.1, 0.2, 0.3]);
        assert!(matches!(result, Err(NoiseError::DimensionMismatch { .. })));
    }

    #[test]
    fn from_data_rejects_zero_dimensions() {
        assert!(ScalarField::from_data(0, 5, vec![]).is_err());
    }

    #[test]
    fn get_rejects_out_of_range_coordinates() {
        let field = ScalarField::filled(4, 3, 0.5).unwrap();
        assert!(matches!(
            field.get(4, 0),
            Err(NoiseError::OutOfBounds { x: 4, y: 0, .. })
        ));
        assert!(field.get(0, 3).is_err());
        assert!(field.get(3, 2).is_ok());
    }

    #[test]
    fn row_returns_slices_in_order() {
        let field = ScalarField::from_data(2, 2, vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(field.row(0), Some(&[0.1, 0.2][..]));
        assert_eq!(field.row(1), Some(&[0.3, 0.4][..]));
        assert_eq!(field.row(2), None);
    }

    #[test]
    fn min_max_finds_extremes() {
        let field = ScalarField::from_data(2, 2, vec![0.4, 0.1, 0.9, 0.5]).unwrap();
        assert_eq!(field.min_max(), (0.1, 0.9));
    }

    #[test]
    fn into_data_returns_buffer() {
        let field = ScalarField::from_data(1, 2, vec![0.25, 0.75]).unwrap();
        assert_eq!(field.into_data(), vec![0.25, 0.75]);
    }

    #[test]
    fn iter_yields_all_triples_in_row_major_order() {
        let field =
            ScalarField::from_data(3, 2, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]).unwrap();
        let triples: Vec<(usize, usize, f64)> = field.iter().collect();
        assert_eq!(triples.len(), 6);
        assert_eq!(triples[0], (0, 0, 0.1));
        assert_eq!(triples[2], (2, 0, 0.3));
        assert_eq!(triples[3], (0, 1, 0.4));
        assert_eq!(triples[5], (2, 1, 0.6));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn get_agrees_with_iter(
                w in 1_usize..=32,
                h in 1_usize..=32,
                v in 0.0_f64..=1.0,
            ) {
                let data: Vec<f64> = (0..w * h).map(|i| (i as f64 * v).fract()).collect();
                let field = ScalarField::from_data(w, h, data).unwrap();
                for (x, y, value) in field.iter() {
                    prop_assert_eq!(field.get(x, y).unwrap().to_bits(), value.to_bits());
                }
            }
        }
    }
}
