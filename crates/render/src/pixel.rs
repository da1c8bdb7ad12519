//! Pure-computation pixel buffer conversion from [`ScalarField`] + [`Palette`].
//!
//! Always available (no feature gate) so callers that draw to their own
//! surface can use the same conversion as the PNG snapshot path.

use crate::palette::Palette;
use perlin_field_core::ScalarField;

/// Maps field values through a palette to produce an RGBA8 pixel buffer.
///
/// Each value is sampled from the palette and written as four bytes
/// (R, G, B, 255) in row-major order. The buffer length is `width * height * 4`.
pub fn field_to_rgba(field: &ScalarField, palette: &Palette) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&t| {
            let [r, g, b] = palette.sample(t).to_rgb8();
            [r, g, b, 255u8]
        })
        .collect()
}
