//! # duotone-ops
//!
//! Image operations for the duotone pipeline.
//!
//! This crate implements the transform a duotone session performs each time
//! a slider moves: fit the source within a display bound, resample it to
//! that size, and tone-map every pixel onto a two-color palette.
//!
//! # Modules
//!
//! - [`fit`] - Aspect-preserving bound fitting for output sizing
//! - [`duotone`] - The per-pixel duotone transform
//! - [`resample`] - Bilinear RGBA8 scaling
//! - [`parallel`] - Rayon row-parallel variants (feature `parallel`, on by
//!   default)
//!
//! # Example
//!
//! ```
//! use duotone_ops::{fit_within_bound, DuotoneParams, Palette};
//! use duotone_ops::duotone::apply_rgba8;
//!
//! let (w, h) = fit_within_bound(1600, 800, 800);
//! assert_eq!((w, h), (800, 400));
//!
//! let src = vec![128u8; 4 * 4 * 4]; // 4x4 mid-gray RGBA
//! let params = DuotoneParams::new(1.0, 1.0, 1.0);
//! let out = apply_rgba8(&src, 4, 4, &params, &Palette::default()).unwrap();
//! assert_eq!(out.len(), src.len());
//! ```
//!
//! # Determinism
//!
//! Every operation is a pure function of its inputs: applying the same
//! parameters to the same source twice produces byte-identical output, and
//! the [`parallel`] variants are bit-equal to the sequential ones. Callers
//! re-derive the output from the original source on every parameter change
//! rather than transforming a previous output, which keeps repeated
//! adjustments idempotent.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod duotone;
pub mod fit;
pub mod resample;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use duotone::{DuotoneParams, Palette, DEFAULT_HIGHLIGHT, DEFAULT_SHADOW};
pub use error::{OpsError, OpsResult};
pub use fit::fit_within_bound;
