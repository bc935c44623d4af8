//! PNG format support.
//!
//! Reading accepts the layouts the upload path actually sees (8-bit and
//! 16-bit RGB/RGBA plus 8-bit grayscale with or without alpha) and always
//! decodes to an RGBA8 [`Bitmap`]. Writing is 8-bit RGBA with an sRGB
//! chunk, the export format of the pipeline.
//!
//! # Example
//!
//! ```rust,ignore
//! use duotone_io::png::{read, write};
//!
//! let bitmap = read("input.png")?;
//! write("output.png", &bitmap)?;
//! ```

use crate::{IoError, IoResult};
use duotone_core::Bitmap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Reads a PNG file into an RGBA8 bitmap.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::Decode(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    let raw = &buf[..info.buffer_size()];

    let rgba = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => raw.to_vec(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => raw
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            raw.iter().flat_map(|&g| [g, g, g, 255]).collect()
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => raw
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        // 16-bit samples are big-endian; narrowing keeps the high byte.
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            raw.chunks_exact(2).map(|pair| pair[0]).collect()
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            let narrowed: Vec<u8> = raw.chunks_exact(2).map(|pair| pair[0]).collect();
            narrowed
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect()
        }
        (color_type, bit_depth) => {
            return Err(IoError::Unsupported(format!(
                "{:?} {:?} PNG",
                color_type, bit_depth
            )));
        }
    };

    Bitmap::from_raw(width, height, rgba).map_err(|e| IoError::Decode(e.to_string()))
}

/// Writes an RGBA8 bitmap to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, bitmap: &Bitmap) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, bitmap.width(), bitmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    // Mark the output as sRGB-encoded
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::Encode(e.to_string()))?;

    png_writer
        .write_image_data(bitmap.data())
        .map_err(|e| IoError::Encode(e.to_string()))?;

    Ok(())
}
