//! Pixel-level types and luminance helpers.
//!
//! # Types
//!
//! - [`Rgb8`] - An 8-bit RGB color, used for palette entries
//! - [`BT601_LUMA`] - Broadcast luminance weights
//!
//! # Luminance
//!
//! The duotone tone map classifies pixels by perceptual brightness using
//! the BT.601 broadcast weighting (`0.299*R + 0.587*G + 0.114*B`). The
//! coefficients are part of the pipeline's contract: palette blending is
//! keyed off this exact weighted sum, so they must not be swapped for the
//! Rec.709 variant without revisiting the tone-map tests.

use crate::error::{Error, Result};
use std::fmt;

// ============================================================================
// BT.601 Luminance Constants
// ============================================================================

/// BT.601 luminance coefficient for the red channel.
///
/// Used in the broadcast luminance formula: `Y = 0.299*R + 0.587*G + 0.114*B`
pub const BT601_LUMA_R: f32 = 0.299;

/// BT.601 luminance coefficient for the green channel.
pub const BT601_LUMA_G: f32 = 0.587;

/// BT.601 luminance coefficient for the blue channel.
pub const BT601_LUMA_B: f32 = 0.114;

/// BT.601 luminance coefficients as an array [R, G, B].
pub const BT601_LUMA: [f32; 3] = [BT601_LUMA_R, BT601_LUMA_G, BT601_LUMA_B];

/// Calculates BT.601 luminance from RGB values.
///
/// The result is in the same range as the inputs: feed channels in [0, 1]
/// to get luminance in [0, 1], or channels in [0, 255] to get luminance in
/// [0, 255].
///
/// # Example
///
/// ```
/// use duotone_core::pixel::luminance_bt601;
///
/// let luma = luminance_bt601([1.0, 1.0, 1.0]);
/// assert!((luma - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_bt601(rgb: [f32; 3]) -> f32 {
    rgb[0] * BT601_LUMA_R + rgb[1] * BT601_LUMA_G + rgb[2] * BT601_LUMA_B
}

/// An 8-bit RGB color.
///
/// Palette entries for the duotone transform are plain sRGB-encoded bytes,
/// matching the 8-bit buffers they blend into.
///
/// # Example
///
/// ```
/// use duotone_core::Rgb8;
///
/// let c = Rgb8::from_hex("c8659a").unwrap();
/// assert_eq!(c, Rgb8::new(200, 101, 154));
/// assert_eq!(c.to_string(), "#c8659a");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from its channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from an `RRGGBB` hex string.
    ///
    /// A leading `#` is accepted and ignored. Short (`RGB`) and
    /// alpha-carrying (`RRGGBBAA`) forms are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not exactly six
    /// hex digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::invalid_color(format!(
                "expected 6 hex digits, got {:?}",
                s
            )));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| Error::invalid_color(format!("not a hex color: {:?}", s)))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Returns the channels as an array [R, G, B].
    #[inline]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_luminance_weights_sum_to_one() {
        assert_relative_eq!(
            BT601_LUMA_R + BT601_LUMA_G + BT601_LUMA_B,
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_luminance_gray() {
        // A neutral gray has luminance equal to its channel value.
        assert_relative_eq!(luminance_bt601([128.0, 128.0, 128.0]), 128.0, epsilon = 1e-3);
    }

    #[test]
    fn test_luminance_green_dominates() {
        let green = luminance_bt601([0.0, 1.0, 0.0]);
        let red = luminance_bt601([1.0, 0.0, 0.0]);
        let blue = luminance_bt601([0.0, 0.0, 1.0]);
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb8::from_hex("2d5a3d").unwrap(), Rgb8::new(45, 90, 61));
        assert_eq!(Rgb8::from_hex("#2d5a3d").unwrap(), Rgb8::new(45, 90, 61));
        assert_eq!(Rgb8::from_hex("FFFFFF").unwrap(), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(Rgb8::from_hex("fff").is_err());
        assert!(Rgb8::from_hex("c8659a00").is_err());
        assert!(Rgb8::from_hex("zzzzzz").is_err());
        assert!(Rgb8::from_hex("").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let c = Rgb8::new(200, 101, 154);
        assert_eq!(Rgb8::from_hex(&c.to_string()).unwrap(), c);
    }
}
