//! PNG output of a [`ScalarField`].
//!
//! Feature-gated behind `png` (default on) so callers with their own drawing
//! surface can depend on this crate without pulling in the `image` crate.
//! The pixel conversion itself lives in [`crate::pixel`].

use crate::palette::Palette;
use crate::pixel::field_to_rgba;
use log::debug;
use perlin_field_core::{NoiseError, ScalarField};
use std::path::Path;

/// Writes a field as a PNG image, mapping values through the given palette.
///
/// Returns `NoiseError::InvalidDimension` if the field dimensions overflow
/// `u32`, or `NoiseError::Io` on write failure.
pub fn write_png(field: &ScalarField, palette: &Palette, path: &Path) -> Result<(), NoiseError> {
    let invalid = || NoiseError::InvalidDimension {
        width: field.width(),
        height: field.height(),
    };
    let w = u32::try_from(field.width()).map_err(|_| invalid())?;
    let h = u32::try_from(field.height()).map_err(|_| invalid())?;
    let rgba = field_to_rgba(field, palette);
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| NoiseError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| NoiseError::Io(e.to_string()))?;
    debug!("wrote {w}x{h} PNG to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_png_round_trip() {
        let field = ScalarField::filled(16, 8, 0.3).unwrap();
        let palette = Palette::from_name("terrain").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrain.png");

        write_png(&field, &palette, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 8);
        assert_eq!(img.get_pixel(0, 0).0, [60, 100, 100, 255]);
    }

    #[test]
    fn write_png_grayscale_levels() {
        let field = ScalarField::from_data(2, 1, vec![0.0, 0.5]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        write_png(&field, &Palette::Grayscale, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn write_png_reports_io_error_for_missing_directory() {
        let field = ScalarField::filled(2, 2, 0.5).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(
            write_png(&field, &Palette::Grayscale, &path),
            Err(NoiseError::Io(_))
        ));
    }
}
