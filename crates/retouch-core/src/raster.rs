//! Raster - the interleaved BGR image buffer
//!
//! # Pixel layout
//!
//! - Samples are 3 bytes each, stored blue, green, red
//! - Rows are top-down, `stride` bytes apart with `stride >= width * 3`
//! - Bytes between `width * 3` and `stride` in each row are padding:
//!   they are never read as color data, but every operation that copies
//!   a raster carries them through verbatim
//!
//! # Ownership model
//!
//! `Raster` owns its storage. `Clone` performs a deep copy, so a cloned
//! raster shares no bytes with its source; mutating one never affects
//! the other. The transform engine relies on this to keep "baseline"
//! and "displayed" buffers fully independent.

use crate::color::Bgr;
use crate::error::{Error, Result};

/// Bytes per sample (blue, green, red).
pub const BYTES_PER_PIXEL: usize = 3;

/// Interleaved BGR raster with explicit row stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Bytes per row, including any trailing padding
    stride: usize,
    /// The sample data, `stride * height` bytes
    data: Vec<u8>,
}

impl Raster {
    /// Create a zero-filled raster with a tight stride (`width * 3`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_stride(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Create a zero-filled raster with an explicit stride.
    ///
    /// Useful when the buffer must mirror an external bitmap whose rows
    /// carry alignment padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or
    /// [`Error::StrideTooSmall`] if `stride < width * 3`.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if stride < width as usize * BYTES_PER_PIXEL {
            return Err(Error::StrideTooSmall { stride, width });
        }
        Ok(Raster {
            width,
            height,
            stride,
            data: vec![0u8; stride * height as usize],
        })
    }

    /// Adopt an existing interleaved BGR buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`], [`Error::StrideTooSmall`],
    /// or [`Error::DataSizeMismatch`] if `data.len() != stride * height`.
    pub fn from_raw(width: u32, height: u32, stride: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if stride < width as usize * BYTES_PER_PIXEL {
            return Err(Error::StrideTooSmall { stride, width });
        }
        let expected = stride * height as usize;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Raster {
            width,
            height,
            stride,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The full backing buffer, padding included.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One full row, padding included.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.stride]
    }

    /// The color bytes of one row (`width * 3` bytes, no padding).
    pub fn row_pixels(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Mutable color bytes of one row (`width * 3` bytes, no padding).
    pub fn row_pixels_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.stride;
        &mut self.data[start..start + self.width as usize * BYTES_PER_PIXEL]
    }

    /// Get the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Result<Bgr> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_unchecked(x, y))
    }

    /// Get the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Bgr {
        let i = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        Bgr::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, px: Bgr) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_unchecked(x, y, px);
        Ok(())
    }

    /// Set the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, px: Bgr) {
        let i = y as usize * self.stride + x as usize * BYTES_PER_PIXEL;
        self.data[i] = px.b;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.r;
    }

    /// Compare only the color samples of two rasters.
    ///
    /// Unlike `==`, this ignores stride and padding bytes, so rasters
    /// that render identically compare equal even when one carries
    /// alignment padding.
    pub fn same_pixels(&self, other: &Raster) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        (0..self.height).all(|y| self.row_pixels(y) == other.row_pixels(y))
    }
}
