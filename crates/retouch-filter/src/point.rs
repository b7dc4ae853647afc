//! Point-wise pixel transforms
//!
//! Every operation reads a source [`Raster`] and returns a fresh raster
//! of the same dimensions and stride; the source is never mutated. Each
//! output channel depends only on the corresponding input channel (no
//! neighborhood access), and every result is clamped to `[0, 255]`.
//! Row padding is carried through to the output verbatim.
//!
//! Because the output is a new allocation, a caller can keep handing the
//! same baseline raster to these functions while displaying the results:
//! repeated calls measure from the baseline, never from a previous
//! result, so parameter sweeps (e.g. a brightness slider) do not
//! compound.

use crate::error::{FilterError, FilterResult};
use retouch_core::{Bgr, Raster};

/// One point-wise transform with its parameters.
///
/// The enum form lets callers queue, log, and dispatch transforms
/// uniformly; [`PointOp::apply`] runs the matching free function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointOp {
    /// Add a (possibly negative) delta to every channel
    Brighten(i32),
    /// Multiply every channel by a non-negative factor
    Contrast(f32),
    /// Replace every channel with its complement
    Invert,
    /// Collapse to BT.601 luma on all three channels
    Grayscale,
    /// Scale each channel by its own non-negative multiplier
    ChannelMask { blue: f32, green: f32, red: f32 },
}

impl PointOp {
    /// Apply this transform to `src`, producing a new raster.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if a scale factor is
    /// negative or non-finite.
    pub fn apply(&self, src: &Raster) -> FilterResult<Raster> {
        match *self {
            PointOp::Brighten(delta) => Ok(brighten(src, delta)),
            PointOp::Contrast(factor) => adjust_contrast(src, factor),
            PointOp::Invert => Ok(invert(src)),
            PointOp::Grayscale => Ok(to_grayscale(src)),
            PointOp::ChannelMask { blue, green, red } => channel_mask(src, blue, green, red),
        }
    }
}

/// Add `delta` to every channel, clamped to `[0, 255]`.
///
/// `delta = 0` is the identity.
pub fn brighten(src: &Raster, delta: i32) -> Raster {
    map_pixels(src, |px| {
        Bgr::new(
            add_clamped(px.b, delta),
            add_clamped(px.g, delta),
            add_clamped(px.r, delta),
        )
    })
}

/// Multiply every channel by `factor`, rounded and clamped.
///
/// `factor = 1.0` is the identity; `factor = 0.0` yields solid black.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `factor` is negative
/// or non-finite.
pub fn adjust_contrast(src: &Raster, factor: f32) -> FilterResult<Raster> {
    check_scale("contrast factor", factor)?;
    Ok(map_pixels(src, |px| {
        Bgr::new(
            scale_clamped(px.b, factor),
            scale_clamped(px.g, factor),
            scale_clamped(px.r, factor),
        )
    }))
}

/// Replace every channel with `255 - channel`.
///
/// Involutive: applying twice restores the original.
pub fn invert(src: &Raster) -> Raster {
    map_pixels(src, |px| Bgr::new(255 - px.b, 255 - px.g, 255 - px.r))
}

/// Set all three channels of every sample to its BT.601 luma.
///
/// Idempotent: a second application changes nothing, since a gray
/// sample's luma is its own value.
pub fn to_grayscale(src: &Raster) -> Raster {
    map_pixels(src, |px| Bgr::gray(px.luma()))
}

/// Scale each channel by its own multiplier, rounded and clamped.
///
/// A multiplier of 0 zeroes a channel and 1 passes it through, which is
/// how the "remove red/green/blue" presets are built, but any
/// non-negative multiplier is accepted.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if any multiplier is
/// negative or non-finite.
pub fn channel_mask(src: &Raster, blue: f32, green: f32, red: f32) -> FilterResult<Raster> {
    check_scale("blue multiplier", blue)?;
    check_scale("green multiplier", green)?;
    check_scale("red multiplier", red)?;
    Ok(map_pixels(src, |px| {
        Bgr::new(
            scale_clamped(px.b, blue),
            scale_clamped(px.g, green),
            scale_clamped(px.r, red),
        )
    }))
}

fn check_scale(name: &str, value: f32) -> FilterResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "{} must be a non-negative finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[inline]
fn add_clamped(c: u8, delta: i32) -> u8 {
    (i32::from(c) + delta).clamp(0, 255) as u8
}

#[inline]
fn scale_clamped(c: u8, factor: f32) -> u8 {
    // truncation after +0.5 rounds half-up; the f32 -> i32 cast
    // saturates, so huge factors land on 255 via the clamp
    ((f32::from(c) * factor + 0.5) as i32).clamp(0, 255) as u8
}

/// Clone `src` (stride and padding included) and rewrite the color
/// bytes of every row through `f`.
fn map_pixels<F: Fn(Bgr) -> Bgr>(src: &Raster, f: F) -> Raster {
    let mut out = src.clone();
    for y in 0..out.height() {
        for px in out.row_pixels_mut(y).chunks_exact_mut(3) {
            let v = f(Bgr::new(px[0], px[1], px[2]));
            px[0] = v.b;
            px[1] = v.g;
            px[2] = v.r;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(w: u32, h: u32) -> Raster {
        let mut r = Raster::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                r.set(x, y, Bgr::new((x * 3) as u8, (y * 5) as u8, (x + y) as u8))
                    .unwrap();
            }
        }
        r
    }

    #[test]
    fn test_brighten_clamps_both_ends() {
        let mut r = Raster::new(2, 1).unwrap();
        r.set(0, 0, Bgr::gray(100)).unwrap();
        r.set(1, 0, Bgr::gray(50)).unwrap();

        assert_eq!(brighten(&r, 200).get(0, 0).unwrap(), Bgr::gray(255));
        assert_eq!(brighten(&r, -200).get(1, 0).unwrap(), Bgr::gray(0));
    }

    #[test]
    fn test_contrast_rejects_bad_factor() {
        let r = gradient(2, 2);
        assert!(matches!(
            adjust_contrast(&r, -0.5),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(matches!(
            adjust_contrast(&r, f32::NAN),
            Err(FilterError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_contrast_rounds() {
        let mut r = Raster::new(1, 1).unwrap();
        r.set(0, 0, Bgr::gray(101)).unwrap();
        // 101 * 1.5 = 151.5, rounds half-up to 152
        let out = adjust_contrast(&r, 1.5).unwrap();
        assert_eq!(out.get(0, 0).unwrap(), Bgr::gray(152));
    }

    #[test]
    fn test_channel_mask_zeroes_channels() {
        let mut r = Raster::new(1, 1).unwrap();
        r.set(0, 0, Bgr::new(10, 20, 30)).unwrap();

        let no_red = channel_mask(&r, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(no_red.get(0, 0).unwrap(), Bgr::new(10, 20, 0));

        let no_blue = channel_mask(&r, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(no_blue.get(0, 0).unwrap(), Bgr::new(0, 20, 30));
    }

    #[test]
    fn test_output_has_source_stride() {
        let mut r = Raster::with_stride(2, 2, 16).unwrap();
        r.set(1, 1, Bgr::new(3, 4, 5)).unwrap();
        let out = invert(&r);
        assert_eq!(out.stride(), 16);
    }
}
