//! Image format detection.
//!
//! Reads detect by magic bytes so a mislabeled upload still decodes;
//! writes go by extension since the file does not exist yet.

use crate::IoResult;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PNG signature, first 8 bytes of every PNG stream.
const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// JPEG SOI marker.
const JPEG_MAGIC: [u8; 2] = [0xff, 0xd8];

/// A detected image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PNG (lossless, alpha).
    Png,
    /// JPEG (lossy, no alpha).
    Jpeg,
    /// Anything else.
    Unknown,
}

impl Format {
    /// Detects the format of an existing file from its magic bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IoError::Io`] if the file cannot be opened or
    /// read.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Format> {
        let mut header = [0u8; 8];
        let mut file = File::open(path.as_ref())?;
        let n = file.read(&mut header)?;
        Ok(Self::from_magic(&header[..n]))
    }

    /// Classifies a byte prefix.
    pub fn from_magic(header: &[u8]) -> Format {
        if header.len() >= PNG_MAGIC.len() && header[..8] == PNG_MAGIC {
            Format::Png
        } else if header.len() >= JPEG_MAGIC.len() && header[..2] == JPEG_MAGIC {
            Format::Jpeg
        } else {
            Format::Unknown
        }
    }

    /// Guesses the format from a path's extension.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Format {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => Format::Png,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            _ => Format::Unknown,
        }
    }

    /// The extension string an unknown path produced, for error messages.
    pub(crate) fn describe_extension(path: &Path) -> String {
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_classification() {
        assert_eq!(Format::from_magic(&PNG_MAGIC), Format::Png);
        assert_eq!(Format::from_magic(&[0xff, 0xd8, 0xff, 0xe0]), Format::Jpeg);
        assert_eq!(Format::from_magic(b"GIF89a"), Format::Unknown);
        assert_eq!(Format::from_magic(&[]), Format::Unknown);
        assert_eq!(Format::from_magic(&[0x89]), Format::Unknown);
    }

    #[test]
    fn test_extension_classification() {
        assert_eq!(Format::from_extension("a.png"), Format::Png);
        assert_eq!(Format::from_extension("a.PNG"), Format::Png);
        assert_eq!(Format::from_extension("a.jpg"), Format::Jpeg);
        assert_eq!(Format::from_extension("a.jpeg"), Format::Jpeg);
        assert_eq!(Format::from_extension("a.webp"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }
}
