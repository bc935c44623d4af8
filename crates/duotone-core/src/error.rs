//! Error types for duotone-core operations.
//!
//! The [`Error`] enum covers the failure modes of bitmap construction:
//! buffer/shape mismatches, degenerate dimensions, and malformed color
//! strings. All variants are terminal to the call that produced them;
//! there is no retry concept anywhere in the pipeline.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building core duotone types.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer length does not match the declared dimensions.
    ///
    /// A bitmap of `width x height` RGBA pixels must carry exactly
    /// `width * height * 4` bytes. Anything else is rejected up front
    /// rather than risking out-of-bounds reads later.
    #[error("pixel buffer length {got} does not match {width}x{height}x4 = {expected}")]
    InvalidBitmap {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Required buffer length in bytes.
        expected: u64,
        /// Actual buffer length in bytes.
        got: usize,
    },

    /// Invalid image dimensions.
    ///
    /// Returned when width or height is zero, or the dimensions would
    /// overflow the buffer size calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Reason why the dimensions are invalid.
        reason: String,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl Error {
    /// Creates an [`Error::InvalidBitmap`] error.
    #[inline]
    pub fn invalid_bitmap(width: u32, height: u32, got: usize) -> Self {
        Self::InvalidBitmap {
            width,
            height,
            expected: width as u64 * height as u64 * 4,
            got,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Returns `true` if this is a buffer/shape error.
    #[inline]
    pub fn is_bitmap_error(&self) -> bool {
        matches!(self, Self::InvalidBitmap { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bitmap_message() {
        let err = Error::invalid_bitmap(4, 3, 40);
        let msg = err.to_string();
        assert!(msg.contains("4x3"));
        assert!(msg.contains("48"));
        assert!(msg.contains("40"));
        assert!(err.is_bitmap_error());
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 100, "width must be > 0");
        assert!(err.to_string().contains("0x100"));
        assert!(!err.is_bitmap_error());
    }
}
