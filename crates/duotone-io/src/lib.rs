//! # duotone-io
//!
//! Image I/O for the duotone pipeline.
//!
//! Decodes the formats a duotone session accepts and encodes its one
//! export format:
//!
//! - **PNG** - read and write (export is always PNG)
//! - **JPEG** - read only
//!
//! Everything decodes to an RGBA8 [`Bitmap`](duotone_core::Bitmap);
//! grayscale and alpha-less layouts are expanded on the way in, so the
//! transform crates never see anything but `width * height * 4` buffers.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use duotone_io::{read, write};
//!
//! // Read PNG or JPEG (detected by magic bytes)
//! let bitmap = read("upload.jpg")?;
//!
//! // Write the transformed result
//! write("output.png", &bitmap)?;
//! ```
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

pub use detect::Format;
pub use error::{IoError, IoResult};

use duotone_core::Bitmap;
use std::path::Path;

/// Reads an image from a file, detecting the format from magic bytes.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, or the stream is corrupted.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    tracing::debug!(path = %path.display(), ?format, "reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::read(path),

        _ => Err(IoError::UnsupportedFormat(Format::describe_extension(path))),
    }
}

/// Writes a bitmap to a file, detecting the format from the extension.
///
/// Only PNG is writable; asking for anything else (including JPEG) is an
/// [`IoError::UnsupportedFormat`].
pub fn write<P: AsRef<Path>>(path: P, bitmap: &Bitmap) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    tracing::debug!(path = %path.display(), ?format, "writing image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, bitmap),

        _ => Err(IoError::UnsupportedFormat(Format::describe_extension(path))),
    }
}
