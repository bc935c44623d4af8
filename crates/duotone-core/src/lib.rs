//! # duotone-core
//!
//! Core types for duotone image processing.
//!
//! This crate provides the foundational types used throughout the duotone-rs
//! workspace:
//!
//! - [`Bitmap`] - Owned RGBA8 pixel buffer with a validated shape
//! - [`Rgb8`] - An 8-bit RGB color (palette entries)
//! - [`luminance_bt601`] - The broadcast luminance weighting used by the
//!   tone-mapping pipeline
//!
//! ## Design Philosophy
//!
//! The central invariant is **shape validity**: a [`Bitmap`] can only be
//! constructed with a buffer whose length is exactly `width * height * 4`.
//! Code downstream of a constructor never has to re-check buffer bounds:
//!
//! ```
//! use duotone_core::Bitmap;
//!
//! let bmp = Bitmap::from_raw(2, 2, vec![0u8; 16]).unwrap();
//! assert_eq!(bmp.data().len(), 16);
//!
//! // Length 15 can never become a Bitmap:
//! assert!(Bitmap::from_raw(2, 2, vec![0u8; 15]).is_err());
//! ```
//!
//! ## Crate Structure
//!
//! This crate is the foundation of duotone-rs and has no internal
//! dependencies. Both `duotone-ops` and `duotone-io` depend on it.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bitmap;
pub mod error;
pub mod pixel;

// Re-exports for convenience
pub use bitmap::*;
pub use error::*;
pub use pixel::{luminance_bt601, Rgb8, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use duotone_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bitmap::{Bitmap, BYTES_PER_PIXEL};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{
        luminance_bt601, Rgb8, BT601_LUMA, BT601_LUMA_B, BT601_LUMA_G, BT601_LUMA_R,
    };
}
