#![deny(unsafe_code)]
//! Core of the perlin-field gradient-noise synthesizer.
//!
//! Provides the seeded [`GradientGrid`], the single-octave [`sample`]r, the
//! multi-octave [`compose_fractal`], and the [`FieldGenerator`] that turns a
//! [`FieldConfig`] into a normalized [`ScalarField`]. Color mapping and output
//! live in `perlin-field-render`.

pub mod config;
pub mod error;
pub mod field;
pub mod fractal;
pub mod generator;
pub mod grid;
pub mod params;
pub mod prng;
pub mod sampler;

pub use config::FieldConfig;
pub use error::NoiseError;
pub use field::ScalarField;
pub use fractal::{compose_fractal, OctaveParams};
pub use generator::{generate_field, grid_dimensions, FieldGenerator};
pub use grid::GradientGrid;
pub use prng::Xorshift64;
pub use sampler::{dot_grid_gradient, fade, lerp, sample};
