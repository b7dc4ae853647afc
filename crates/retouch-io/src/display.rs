//! Display bitmap bridge
//!
//! Converts between a [`Raster`] and the bitmap representation a
//! windowing shell renders. The shell side may use a different channel
//! order, carry an alpha byte, and impose its own row stride; this
//! module is the only place those differences are reconciled, so the
//! rest of the library stays free of any windowing-API assumptions.
//!
//! `to_display` is a verbatim copy: both sides agree on interleaved
//! BGR, so the raster's stride and bytes (padding included) are reused
//! and only DPI metadata is attached. `from_display` normalizes
//! whatever layout arrives back into canonical BGR.

use crate::{IoError, IoResult};
use retouch_core::{BYTES_PER_PIXEL, Raster};

/// Resolution metadata attached to every rendered bitmap.
pub const DISPLAY_DPI: f32 = 96.0;

/// Channel layout of a display bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// Blue, green, red - the raster's native order
    Bgr24,
    /// Blue, green, red, alpha
    Bgra32,
    /// Red, green, blue
    Rgb24,
    /// Red, green, blue, alpha
    Rgba32,
}

impl DisplayFormat {
    /// Bytes occupied by one pixel in this layout.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Bgr24 | Self::Rgb24 => 3,
            Self::Bgra32 | Self::Rgba32 => 4,
        }
    }
}

/// A renderable bitmap in the shell's native representation.
#[derive(Debug, Clone)]
pub struct DisplayBitmap {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Bytes per row
    pub stride: usize,
    /// Horizontal resolution
    pub dpi_x: f32,
    /// Vertical resolution
    pub dpi_y: f32,
    /// Channel layout
    pub format: DisplayFormat,
    /// Pixel data, `stride * height` bytes
    pub data: Vec<u8>,
}

/// Render a raster as a display bitmap.
///
/// No color conversion takes place: the bitmap reuses the raster's
/// stride and bytes and is tagged with the fixed 96 DPI resolution.
pub fn to_display(raster: &Raster) -> DisplayBitmap {
    DisplayBitmap {
        width: raster.width(),
        height: raster.height(),
        stride: raster.stride(),
        dpi_x: DISPLAY_DPI,
        dpi_y: DISPLAY_DPI,
        format: DisplayFormat::Bgr24,
        data: raster.data().to_vec(),
    }
}

/// Convert a display bitmap back into a raster.
///
/// The bitmap is first forced into the canonical 3-channel BGR layout
/// (swizzling and dropping alpha as needed), then copied row-by-row
/// respecting each side's stride. The result has a tight stride.
///
/// # Errors
///
/// Returns [`IoError::NullSource`] if `bitmap` is absent, and
/// [`IoError::InvalidData`] if the bitmap's stride or buffer is too
/// small for its declared dimensions.
pub fn from_display(bitmap: Option<&DisplayBitmap>) -> IoResult<Raster> {
    let bmp = bitmap.ok_or(IoError::NullSource)?;

    let bpp = bmp.format.bytes_per_pixel();
    if bmp.stride < bmp.width as usize * bpp {
        return Err(IoError::InvalidData(format!(
            "display stride {} too small for width {}",
            bmp.stride, bmp.width
        )));
    }
    let needed = bmp.stride * bmp.height as usize;
    if bmp.data.len() < needed {
        return Err(IoError::InvalidData(format!(
            "display buffer holds {} bytes, need {}",
            bmp.data.len(),
            needed
        )));
    }

    let mut raster = Raster::new(bmp.width, bmp.height)?;

    for y in 0..bmp.height {
        let src_row = &bmp.data[y as usize * bmp.stride..];
        let dst_row = raster.row_pixels_mut(y);
        for x in 0..bmp.width as usize {
            let s = x * bpp;
            let (b, g, r) = match bmp.format {
                DisplayFormat::Bgr24 | DisplayFormat::Bgra32 => {
                    (src_row[s], src_row[s + 1], src_row[s + 2])
                }
                DisplayFormat::Rgb24 | DisplayFormat::Rgba32 => {
                    (src_row[s + 2], src_row[s + 1], src_row[s])
                }
            };
            let d = x * BYTES_PER_PIXEL;
            dst_row[d] = b;
            dst_row[d + 1] = g;
            dst_row[d + 2] = r;
        }
    }

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Bgr;

    fn sample_raster() -> Raster {
        let mut r = Raster::new(2, 2).unwrap();
        r.set(0, 0, Bgr::new(1, 2, 3)).unwrap();
        r.set(1, 0, Bgr::new(4, 5, 6)).unwrap();
        r.set(0, 1, Bgr::new(7, 8, 9)).unwrap();
        r.set(1, 1, Bgr::new(10, 11, 12)).unwrap();
        r
    }

    #[test]
    fn test_to_display_is_verbatim() {
        let raster = sample_raster();
        let bmp = to_display(&raster);

        assert_eq!(bmp.format, DisplayFormat::Bgr24);
        assert_eq!(bmp.stride, raster.stride());
        assert_eq!(bmp.data, raster.data());
        assert_eq!(bmp.dpi_x, DISPLAY_DPI);
        assert_eq!(bmp.dpi_y, DISPLAY_DPI);
    }

    #[test]
    fn test_display_roundtrip() {
        let raster = sample_raster();
        let back = from_display(Some(&to_display(&raster))).unwrap();
        assert_eq!(back, raster);
    }

    #[test]
    fn test_from_display_null_source() {
        assert!(matches!(from_display(None), Err(IoError::NullSource)));
    }

    #[test]
    fn test_from_display_swizzles_rgba() {
        let bmp = DisplayBitmap {
            width: 1,
            height: 1,
            stride: 4,
            dpi_x: DISPLAY_DPI,
            dpi_y: DISPLAY_DPI,
            format: DisplayFormat::Rgba32,
            data: vec![30, 20, 10, 255], // R G B A
        };
        let raster = from_display(Some(&bmp)).unwrap();
        assert_eq!(raster.get(0, 0).unwrap(), Bgr::new(10, 20, 30));
    }

    #[test]
    fn test_from_display_drops_bgra_alpha() {
        let bmp = DisplayBitmap {
            width: 1,
            height: 1,
            stride: 4,
            dpi_x: DISPLAY_DPI,
            dpi_y: DISPLAY_DPI,
            format: DisplayFormat::Bgra32,
            data: vec![10, 20, 30, 0],
        };
        let raster = from_display(Some(&bmp)).unwrap();
        assert_eq!(raster.get(0, 0).unwrap(), Bgr::new(10, 20, 30));
    }

    #[test]
    fn test_from_display_respects_source_stride() {
        // one pixel per row, 8-byte stride with junk in the padding
        let bmp = DisplayBitmap {
            width: 1,
            height: 2,
            stride: 8,
            dpi_x: DISPLAY_DPI,
            dpi_y: DISPLAY_DPI,
            format: DisplayFormat::Bgr24,
            data: vec![
                1, 2, 3, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
                4, 5, 6, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            ],
        };
        let raster = from_display(Some(&bmp)).unwrap();
        assert_eq!(raster.stride(), 3);
        assert_eq!(raster.get(0, 0).unwrap(), Bgr::new(1, 2, 3));
        assert_eq!(raster.get(0, 1).unwrap(), Bgr::new(4, 5, 6));
    }

    #[test]
    fn test_from_display_short_buffer() {
        let bmp = DisplayBitmap {
            width: 2,
            height: 2,
            stride: 6,
            dpi_x: DISPLAY_DPI,
            dpi_y: DISPLAY_DPI,
            format: DisplayFormat::Bgr24,
            data: vec![0u8; 11],
        };
        assert!(matches!(
            from_display(Some(&bmp)),
            Err(IoError::InvalidData(_))
        ));
    }
}
