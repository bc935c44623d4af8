//! JPEG format support (decode only).
//!
//! Uploads are as often JPEG as PNG, so the read path handles baseline
//! JPEG via `jpeg-decoder`, expanding to RGBA8 with opaque alpha. There
//! is no JPEG write: the pipeline exports PNG.

use crate::{IoError, IoResult};
use duotone_core::Bitmap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a JPEG file into an RGBA8 bitmap.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("missing JPEG header info".into()))?;

    let rgba: Vec<u8> = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        jpeg_decoder::PixelFormat::L8 => pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(IoError::Unsupported(format!("{:?} JPEG", other)));
        }
    };

    Bitmap::from_raw(info.width as u32, info.height as u32, rgba)
        .map_err(|e| IoError::Decode(e.to_string()))
}
