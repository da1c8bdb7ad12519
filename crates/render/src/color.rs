//! sRGB color used by palettes and pixel output.

use perlin_field_core::NoiseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"`. The hex round-trip has 8-bit
/// quantization, which is lossless for colors built with [`Srgb::from_rgb8`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Srgb {
        Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// A gray with all channels set to `v`, clamped to [0, 1].
    pub fn gray(v: f64) -> Srgb {
        let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
        Srgb { r: v, g: v, b: v }
    }

    /// Quantizes to 8-bit channels with rounding, clamping out-of-range values.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `NoiseError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, NoiseError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(NoiseError::InvalidColor(format!(
                "expected 6 hex digits, got {hex:?}"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| NoiseError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb::from_rgb8(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
