//! The duotone tone-mapping transform.
//!
//! Maps the luminance range of an image onto an interpolation between two
//! palette colors, with brightness/contrast pre-adjustment and an
//! intensity blend against the adjusted original.
//!
//! # Per-pixel algorithm
//!
//! 1. Normalize R, G, B to [0, 1].
//! 2. Adjust: `((c - 0.5) * contrast + 0.5) * brightness`, scaled back to
//!    the 0-255 range and clamped.
//! 3. Compute BT.601 luminance of the adjusted channels, normalized to
//!    [0, 1].
//! 4. Luminance strictly above 0.5 blends the highlight color toward
//!    white; 0.5 and below darkens the shadow color toward black.
//! 5. Lerp between the adjusted channels and the tone-mapped target by
//!    `intensity`; round to nearest, clamp, write back. Alpha is copied
//!    from the source untouched.
//!
//! Every pixel is independent of its neighbors, so the [`crate::parallel`]
//! variant partitions rows across threads with no synchronization.
//!
//! # Output discipline
//!
//! [`apply_rgba8_into`] validates both buffers before writing a single
//! byte. A failing call never leaves a partially-written destination.

use crate::{OpsError, OpsResult};
use duotone_core::{luminance_bt601, Bitmap, Rgb8, BYTES_PER_PIXEL};

/// Default highlight color (a warm pink).
pub const DEFAULT_HIGHLIGHT: Rgb8 = Rgb8::new(200, 101, 154);

/// Default shadow color (a deep green).
pub const DEFAULT_SHADOW: Rgb8 = Rgb8::new(45, 90, 61);

/// Cap on how far highlights are pushed toward white.
const HIGHLIGHT_LIFT: f32 = 0.3;

/// Cap on how far shadows are pulled toward black.
const SHADOW_DROP: f32 = 0.5;

/// Parameters for the duotone transform.
///
/// Intensity is meaningful on [0, 1] (0 keeps the adjusted original,
/// 1 is fully tone-mapped); contrast and brightness are multiplicative
/// factors on [0, inf) with 1.0 meaning no change. Values outside those
/// ranges are clamped when the transform runs rather than rejected,
/// matching the permissive behavior of reading a slider as-is.
///
/// Parameters are owned by the caller and read fresh on every apply call;
/// the transform holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuotoneParams {
    /// Blend factor between adjusted original and tone-mapped color.
    pub intensity: f32,
    /// Contrast factor around the 0.5 midpoint (1.0 = no change).
    pub contrast: f32,
    /// Brightness factor (1.0 = no change).
    pub brightness: f32,
}

impl Default for DuotoneParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl DuotoneParams {
    /// Creates parameters from already-normalized values.
    pub fn new(intensity: f32, contrast: f32, brightness: f32) -> Self {
        Self {
            intensity,
            contrast,
            brightness,
        }
    }

    /// Creates parameters from UI slider values on the 0-100 scale.
    ///
    /// This is the normalization contract with the UI layer: each slider
    /// value is divided by 100, so 100 means 1.0. Values above 100 are
    /// legal for contrast and brightness (the factor just exceeds 1).
    ///
    /// # Example
    ///
    /// ```
    /// use duotone_ops::DuotoneParams;
    ///
    /// let p = DuotoneParams::from_percent(50, 120, 100);
    /// assert_eq!(p.intensity, 0.5);
    /// assert_eq!(p.contrast, 1.2);
    /// assert_eq!(p.brightness, 1.0);
    /// ```
    pub fn from_percent(intensity: u32, contrast: u32, brightness: u32) -> Self {
        Self {
            intensity: intensity as f32 / 100.0,
            contrast: contrast as f32 / 100.0,
            brightness: brightness as f32 / 100.0,
        }
    }

    /// The identity parameters (no visible change).
    pub fn identity() -> Self {
        Self {
            intensity: 0.0,
            contrast: 1.0,
            brightness: 1.0,
        }
    }

    /// Check if this is identity (no-op).
    pub fn is_identity(&self) -> bool {
        self.intensity == 0.0 && self.contrast == 1.0 && self.brightness == 1.0
    }

    /// Returns a copy with every field clamped to its accepted range.
    ///
    /// Intensity goes to [0, 1], contrast and brightness to [0, inf).
    pub fn clamped(&self) -> Self {
        Self {
            intensity: self.intensity.clamp(0.0, 1.0),
            contrast: self.contrast.max(0.0),
            brightness: self.brightness.max(0.0),
        }
    }

    /// Clamps the parameters, rejecting values that cannot be clamped.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidParameter`] if any field is NaN or
    /// infinite.
    pub(crate) fn sanitized(&self) -> OpsResult<Self> {
        if !self.intensity.is_finite() || !self.contrast.is_finite() || !self.brightness.is_finite()
        {
            return Err(OpsError::InvalidParameter(format!(
                "non-finite duotone parameters: {:?}",
                self
            )));
        }
        Ok(self.clamped())
    }

    /// Brightness/contrast adjustment of a single channel in 0-255 space.
    ///
    /// The result is unclamped; [`duotone_pixel`] clamps after adjusting
    /// all three channels.
    #[inline]
    pub fn adjust(&self, c: f32) -> f32 {
        ((c / 255.0 - 0.5) * self.contrast + 0.5) * self.brightness * 255.0
    }
}

/// The two colors a duotone image is built from.
///
/// Light areas map toward `highlight`, dark areas toward `shadow`. The
/// pair is passed into every apply call, so one engine serves any number
/// of color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color for luminance above the midpoint.
    pub highlight: Rgb8,
    /// Color for luminance at or below the midpoint.
    pub shadow: Rgb8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            highlight: DEFAULT_HIGHLIGHT,
            shadow: DEFAULT_SHADOW,
        }
    }
}

impl Palette {
    /// Creates a palette from a highlight and a shadow color.
    pub fn new(highlight: Rgb8, shadow: Rgb8) -> Self {
        Self { highlight, shadow }
    }

    /// Tone-maps a normalized luminance value to a target color.
    ///
    /// Luminance strictly greater than 0.5 selects the highlight branch:
    /// the highlight color is lifted toward white by up to 30% of the
    /// remaining headroom as luminance approaches 1. Luminance of 0.5 or
    /// less selects the shadow branch: the shadow color is darkened by up
    /// to 50% as luminance approaches 0. The returned channels are in the
    /// 0-255 range.
    #[inline]
    pub fn target(&self, luminance: f32) -> [f32; 3] {
        if luminance > 0.5 {
            let factor = (luminance - 0.5) * 2.0;
            let [r, g, b] = self.highlight.channels();
            [
                r as f32 + (255.0 - r as f32) * factor * HIGHLIGHT_LIFT,
                g as f32 + (255.0 - g as f32) * factor * HIGHLIGHT_LIFT,
                b as f32 + (255.0 - b as f32) * factor * HIGHLIGHT_LIFT,
            ]
        } else {
            let factor = (0.5 - luminance) * 2.0;
            let [r, g, b] = self.shadow.channels();
            let scale = 1.0 - factor * SHADOW_DROP;
            [r as f32 * scale, g as f32 * scale, b as f32 * scale]
        }
    }
}

/// Transforms one pixel's RGB channels (0-255 space in, 0-255 space out).
///
/// `params` is used as given; callers wanting slider-style clamping go
/// through [`DuotoneParams::clamped`] (the buffer-level entry points do
/// this automatically).
#[inline]
pub fn duotone_pixel(rgb: [f32; 3], params: &DuotoneParams, palette: &Palette) -> [f32; 3] {
    let adjusted = [
        params.adjust(rgb[0]).clamp(0.0, 255.0),
        params.adjust(rgb[1]).clamp(0.0, 255.0),
        params.adjust(rgb[2]).clamp(0.0, 255.0),
    ];

    let luminance = luminance_bt601(adjusted) / 255.0;
    let target = palette.target(luminance);

    let t = params.intensity;
    [
        adjusted[0] * (1.0 - t) + target[0] * t,
        adjusted[1] * (1.0 - t) + target[1] * t,
        adjusted[2] * (1.0 - t) + target[2] * t,
    ]
}

/// Round to nearest and clamp a channel value for writeback.
#[inline]
pub(crate) fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Transforms one row of RGBA8 pixels. `params` must be sanitized.
pub(crate) fn transform_row(src: &[u8], dst: &mut [u8], params: &DuotoneParams, palette: &Palette) {
    for (s, d) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let rgb = duotone_pixel([s[0] as f32, s[1] as f32, s[2] as f32], params, palette);
        d[0] = quantize(rgb[0]);
        d[1] = quantize(rgb[1]);
        d[2] = quantize(rgb[2]);
        d[3] = s[3];
    }
}

/// Validated RGBA8 buffer length for the given dimensions.
pub(crate) fn rgba_len(width: u32, height: u32) -> OpsResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
        .ok_or_else(|| {
            OpsError::InvalidBitmap(format!("dimensions {}x{} overflow", width, height))
        })
}

/// Checks a source buffer against its declared dimensions.
pub(crate) fn check_src(src: &[u8], width: u32, height: u32) -> OpsResult<usize> {
    let expected = rgba_len(width, height)?;
    if src.len() != expected {
        return Err(OpsError::InvalidBitmap(format!(
            "expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            src.len()
        )));
    }
    Ok(expected)
}

/// Applies the duotone transform to a flat RGBA8 buffer.
///
/// Returns a new buffer of identical size; the source is untouched, so a
/// caller can keep applying fresh parameters to the same source without
/// accumulating rounding error.
///
/// # Errors
///
/// Returns [`OpsError::InvalidBitmap`] if `src.len()` is not
/// `width * height * 4`, and [`OpsError::InvalidParameter`] for
/// non-finite parameters.
///
/// # Example
///
/// ```
/// use duotone_ops::duotone::apply_rgba8;
/// use duotone_ops::{DuotoneParams, Palette};
///
/// let src = vec![200u8; 2 * 2 * 4];
/// let out = apply_rgba8(
///     &src,
///     2,
///     2,
///     &DuotoneParams::new(1.0, 1.0, 1.0),
///     &Palette::default(),
/// )
/// .unwrap();
/// assert_eq!(out.len(), src.len());
/// ```
pub fn apply_rgba8(
    src: &[u8],
    width: u32,
    height: u32,
    params: &DuotoneParams,
    palette: &Palette,
) -> OpsResult<Vec<u8>> {
    let len = check_src(src, width, height)?;
    let mut dst = vec![0u8; len];
    apply_rgba8_into(src, &mut dst, width, height, params, palette)?;
    Ok(dst)
}

/// Applies the duotone transform into a caller-provided buffer.
///
/// `dst` must have the same length as `src`. Both buffers are validated
/// before any byte is written: on error the destination is untouched, so
/// the caller never observes a half-transformed frame.
pub fn apply_rgba8_into(
    src: &[u8],
    dst: &mut [u8],
    width: u32,
    height: u32,
    params: &DuotoneParams,
    palette: &Palette,
) -> OpsResult<()> {
    let expected = check_src(src, width, height)?;
    if dst.len() != expected {
        return Err(OpsError::SizeMismatch(format!(
            "destination is {} bytes, expected {}",
            dst.len(),
            expected
        )));
    }
    let params = params.sanitized()?;
    tracing::trace!(
        width,
        height,
        intensity = params.intensity,
        contrast = params.contrast,
        brightness = params.brightness,
        "duotone apply"
    );

    if params.is_identity() {
        dst.copy_from_slice(src);
        return Ok(());
    }

    let row = width as usize * BYTES_PER_PIXEL;
    for (srow, drow) in src.chunks_exact(row).zip(dst.chunks_exact_mut(row)) {
        transform_row(srow, drow, &params, palette);
    }
    Ok(())
}

/// Applies the duotone transform to a [`Bitmap`].
///
/// The bitmap's shape is valid by construction, so the only possible
/// failure is a non-finite parameter.
pub fn apply(src: &Bitmap, params: &DuotoneParams, palette: &Palette) -> OpsResult<Bitmap> {
    let data = apply_rgba8(src.data(), src.width(), src.height(), params, palette)?;
    // Shape is preserved exactly, so this cannot fail.
    Bitmap::from_raw(src.width(), src.height(), data)
        .map_err(|e| OpsError::InvalidBitmap(e.to_string()))
}
