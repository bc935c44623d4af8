//! Bilinear RGBA8 resampling.
//!
//! Scales a source bitmap onto the surface sized by
//! [`crate::fit::fit_within_bound`]. Bilinear interpolation with
//! edge-clamped, center-aligned sampling is enough here: the fit step only
//! ever shrinks toward a display bound, and the transform downstream
//! quantizes to 8 bits anyway.

use crate::duotone::{check_src, quantize, rgba_len};
use crate::{OpsError, OpsResult};
use duotone_core::BYTES_PER_PIXEL;

/// Resamples an RGBA8 buffer to new dimensions.
///
/// All four channels are interpolated, alpha included. Identical source
/// and destination dimensions return a plain copy.
///
/// # Errors
///
/// Returns [`OpsError::InvalidBitmap`] if `src.len()` does not match the
/// source dimensions and [`OpsError::InvalidParameter`] if either
/// destination dimension is zero.
///
/// # Example
///
/// ```
/// use duotone_ops::resample::resample_rgba8;
///
/// let src = vec![100u8; 8 * 8 * 4];
/// let dst = resample_rgba8(&src, 8, 8, 4, 4).unwrap();
/// assert_eq!(dst.len(), 4 * 4 * 4);
/// ```
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
    tracing::trace!(src_w, src_h, dst_w, dst_h, "bilinear resample");

    let len = rgba_len(dst_w, dst_h)?;
    let mut dst = vec![0u8; len];

    let scale_x = src_w as f32 / dst_w as f32;
    let scale_y = src_h as f32 / dst_h as f32;
    let row_bytes = dst_w as usize * BYTES_PER_PIXEL;

    for (y, row) in dst.chunks_exact_mut(row_bytes).enumerate() {
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
    }

    Ok(dst)
}

/// Fills one destination row by bilinear sampling. Shared by the
/// sequential and parallel entry points.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resample_row(
    src: &[u8],
    src_w: usize,
    src_h: usize,
    dst_w: usize,
    scale_x: f32,
    scale_y: f32,
    y: usize,
    row: &mut [u8],
) {
    // Center-aligned mapping: destination pixel centers land on source
    // pixel centers, clamped at the edges.
    let sy = ((y as f32 + 0.5) * scale_y - 0.5).clamp(0.0, (src_h - 1) as f32);
    let y0 = sy.floor() as usize;
    let y1 = (y0 + 1).min(src_h - 1);
    let fy = sy - y0 as f32;

    for x in 0..dst_w {
        let sx = ((x as f32 + 0.5) * scale_x - 0.5).clamp(0.0, (src_w - 1) as f32);
        let x0 = sx.floor() as usize;
        let x1 = (x0 + 1).min(src_w - 1);
        let fx = sx - x0 as f32;

        let i00 = (y0 * src_w + x0) * BYTES_PER_PIXEL;
        let i01 = (y0 * src_w + x1) * BYTES_PER_PIXEL;
        let i10 = (y1 * src_w + x0) * BYTES_PER_PIXEL;
        let i11 = (y1 * src_w + x1) * BYTES_PER_PIXEL;

        for c in 0..BYTES_PER_PIXEL {
            let top = src[i00 + c] as f32 * (1.0 - fx) + src[i01 + c] as f32 * fx;
            let bottom = src[i10 + c] as f32 * (1.0 - fx) + src[i11 + c] as f32 * fx;
            row[x * BYTES_PER_PIXEL + c] = quantize(top * (1.0 - fy) + bottom * fy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_dimensions_copy() {
        let src: Vec<u8> = (0..64).collect();
        let dst = resample_rgba8(&src, 4, 4, 4, 4).unwrap();
        assert_eq!(dst, src);
    }

    #[test]
    fn constant_image_stays_constant() {
        let src = vec![73u8; 16 * 16 * 4];
        for (w, h) in [(8, 8), (5, 11), (32, 32)] {
            let dst = resample_rgba8(&src, 16, 16, w, h).unwrap();
            assert_eq!(dst.len(), (w * h * 4) as usize);
            assert!(dst.iter().all(|&b| b == 73));
        }
    }

    #[test]
    fn downscale_averages_neighbors() {
        // 2x1 black/white shrinks to one mid pixel.
        let src = vec![0, 0, 0, 255, 255, 255, 255, 255];
        let dst = resample_rgba8(&src, 2, 1, 1, 1).unwrap();
        assert!((dst[0] as i32 - 128).abs() <= 1);
        assert_eq!(dst[3], 255);
    }

    #[test]
    fn rejects_bad_source_length() {
        let err = resample_rgba8(&[0u8; 10], 2, 2, 1, 1).unwrap_err();
        assert!(matches!(err, OpsError::InvalidBitmap(_)));
    }

    #[test]
    fn rejects_zero_destination() {
        let src = vec![0u8; 16];
        let err = resample_rgba8(&src, 2, 2, 0, 2).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }
}
