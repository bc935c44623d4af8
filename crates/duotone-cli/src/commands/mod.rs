//! CLI command implementations

pub mod apply;
pub mod info;

use anyhow::{Context, Result};
use duotone_core::Bitmap;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Load image from path
pub fn load_image(path: &Path) -> Result<Bitmap> {
    duotone_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, bitmap: &Bitmap) -> Result<()> {
    duotone_io::write(path, bitmap).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Default export name: `<stem>-duotone-<id>.png` next to the input.
///
/// The id keeps repeated exports of the same source from clobbering each
/// other.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    input.with_file_name(format!("{}-duotone-{}.png", stem, random_id(6)))
}

/// Short lowercase alphanumeric id.
fn random_id(length: usize) -> String {
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
