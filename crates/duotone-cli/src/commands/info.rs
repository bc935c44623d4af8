//! Info command

use crate::InfoArgs;
use anyhow::Result;

pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let bitmap = super::load_image(path)?;
        let file_size = std::fs::metadata(path)?.len();

        println!(
            "{}: {} x {} RGBA8, {}",
            path.display(),
            bitmap.width(),
            bitmap.height(),
            super::format_size(file_size)
        );

        if verbose {
            println!(
                "  {} pixels, {} bytes decoded",
                bitmap.pixel_count(),
                bitmap.data().len()
            );
        }
    }

    Ok(())
}
