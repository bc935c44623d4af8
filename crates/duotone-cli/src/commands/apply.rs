//! Apply command
//!
//! Fits the source within the display bound, resamples, runs the duotone
//! transform and writes the PNG export. The transform always derives from
//! the freshly-decoded source, never from a previous output.

use crate::ApplyArgs;
use anyhow::{Context, Result};
use duotone_core::{Bitmap, Rgb8};
use duotone_ops::{fit_within_bound, parallel, DuotoneParams, Palette};
use tracing::debug;

pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let source = super::load_image(&args.input)?;
    let (src_w, src_h) = source.dimensions();
    debug!(src_w, src_h, "decoded source");

    let (dst_w, dst_h) = if args.no_fit {
        (src_w, src_h)
    } else {
        fit_within_bound(src_w, src_h, args.max_dimension.max(1))
    };

    if verbose && (dst_w, dst_h) != (src_w, src_h) {
        println!("Fitting {}x{} -> {}x{}", src_w, src_h, dst_w, dst_h);
    }

    let surface = parallel::resample_rgba8(source.data(), src_w, src_h, dst_w, dst_h)?;

    let palette = Palette::new(
        Rgb8::from_hex(&args.highlight).context("Invalid --highlight color")?,
        Rgb8::from_hex(&args.shadow).context("Invalid --shadow color")?,
    );
    // Slider scale contract: UI values are percentages, divided by 100.
    let params = DuotoneParams::from_percent(args.intensity, args.contrast, args.brightness);

    if verbose {
        println!(
            "Applying duotone: intensity {}%, contrast {}%, brightness {}%, palette {} / {}",
            args.intensity, args.contrast, args.brightness, palette.highlight, palette.shadow
        );
    }

    let pixels = parallel::apply_rgba8(&surface, dst_w, dst_h, &params, &palette)?;
    let output = Bitmap::from_raw(dst_w, dst_h, pixels)?;

    let path = args
        .output
        .unwrap_or_else(|| super::default_output_path(&args.input));
    super::save_image(&path, &output)?;

    if verbose {
        println!("Wrote {} ({}x{})", path.display(), dst_w, dst_h);
    }

    Ok(())
}
