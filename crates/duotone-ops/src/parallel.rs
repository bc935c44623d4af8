//! Rayon row-parallel variants of the duotone operations.
//!
//! Every pixel of the transform is independent, so rows partition cleanly
//! across threads with no synchronization; the output is bit-identical to
//! the sequential functions in [`crate::duotone`] and [`crate::resample`].
//!
//! # Example
//!
//! ```
//! use duotone_ops::{parallel, DuotoneParams, Palette};
//!
//! let src = vec![90u8; 64 * 64 * 4];
//! let out = parallel::apply_rgba8(
//!     &src,
//!     64,
//!     64,
//!     &DuotoneParams::new(1.0, 1.0, 1.0),
//!     &Palette::default(),
//! )
//! .unwrap();
//! assert_eq!(out.len(), src.len());
//! ```

use crate::duotone::{check_src, rgba_len, transform_row, DuotoneParams, Palette};
use crate::resample::resample_row;
use crate::{OpsError, OpsResult};
use duotone_core::BYTES_PER_PIXEL;
use rayon::prelude::*;

/// Row-parallel duotone transform over a flat RGBA8 buffer.
///
/// Validation, parameter clamping and output are identical to
/// [`crate::duotone::apply_rgba8`].
pub fn apply_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    params: &DuotoneParams,
    palette: &Palette,
) -> OpsResult<Vec<u8>> {
    let len = check_src(src, width, height)?;
    let params = params.sanitized()?;

    if params.is_identity() {
        return Ok(src.to_vec());
    }

    let mut dst = vec![0u8; len];
    let row = width as usize * BYTES_PER_PIXEL;

    dst.par_chunks_mut(row)
        .zip(src.par_chunks(row))
        .for_each(|(drow, srow)| transform_row(srow, drow, &params, palette));

    Ok(dst)
}

/// Row-parallel bilinear resampling.
///
/// Bit-identical to [`crate::resample::resample_rgba8`].
pub fn resample_rgba8(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> OpsResult<Vec<u8>> {
    check_src(src, src_w, src_h)?;
    if dst_w == 0 || dst_h == 0 {
        return Err(OpsError::InvalidParameter(
            "destination size must be > 0".into(),
        ));
    }
    if (src_w, src_h) == (dst_w, dst_h) {
        return Ok(src.to_vec());
    }

    let len = rgba_len(dst_w, dst_h)?;
    let mut dst = vec![0u8; len];

    let scale_x = src_w as f32 / dst_w as f32;
    let scale_y = src_h as f32 / dst_h as f32;
    let row_bytes = dst_w as usize * BYTES_PER_PIXEL;

    dst.par_chunks_mut(row_bytes).enumerate().for_each(|(y, row)| {
        resample_row(
            src,
            src_w as usize,
            src_h as usize,
            dst_w as usize,
            scale_x,
            scale_y,
            y,
            row,
        );
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{duotone, resample};

    fn gradient(width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.push((x * 3 % 256) as u8);
                data.push((y * 5 % 256) as u8);
                data.push(((x * y) % 256) as u8);
                data.push(255);
            }
        }
        data
    }

    #[test]
    fn matches_sequential_apply() {
        let src = gradient(97, 41); // odd sizes, uneven row split
        let params = DuotoneParams::new(0.65, 1.4, 0.85);
        let palette = Palette::default();
        let seq = duotone::apply_rgba8(&src, 97, 41, &params, &palette).unwrap();
        let par = apply_rgba8(&src, 97, 41, &params, &palette).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn matches_sequential_resample() {
        let src = gradient(63, 37);
        let seq = resample::resample_rgba8(&src, 63, 37, 30, 17).unwrap();
        let par = resample_rgba8(&src, 63, 37, 30, 17).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn validates_like_sequential() {
        let err = apply_rgba8(
            &[0u8; 12],
            2,
            2,
            &DuotoneParams::default(),
            &Palette::default(),
        )
        .unwrap_err();
        assert!(matches!(err, OpsError::InvalidBitmap(_)));
    }
}
