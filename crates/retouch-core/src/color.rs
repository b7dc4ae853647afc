//! Color sample type and helpers
//!
//! A raster sample is three 8-bit channels stored blue-first, matching
//! the interleaved BGR layout of [`Raster`](crate::Raster) rows.

/// One BGR color sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bgr {
    /// Blue channel
    pub b: u8,
    /// Green channel
    pub g: u8,
    /// Red channel
    pub r: u8,
}

impl Bgr {
    /// Black sample (all channels zero).
    pub const BLACK: Bgr = Bgr::new(0, 0, 0);

    /// White sample (all channels 255).
    pub const WHITE: Bgr = Bgr::new(255, 255, 255);

    /// Create a sample from blue, green, and red channel values.
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Bgr { b, g, r }
    }

    /// Luminance of this sample using ITU-R BT.601 weights,
    /// rounded to the nearest integer.
    ///
    /// `luma = round(0.299 R + 0.587 G + 0.114 B)`
    pub fn luma(self) -> u8 {
        let y = 0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b);
        // y is in [0.0, 255.0], so truncation after +0.5 rounds half-up
        (y + 0.5) as u8
    }

    /// A gray sample with all three channels set to the same value.
    pub const fn gray(v: u8) -> Self {
        Bgr::new(v, v, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights() {
        // round(0.299*30 + 0.587*20 + 0.114*10) = round(21.85) = 22
        assert_eq!(Bgr::new(10, 20, 30).luma(), 22);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(Bgr::BLACK.luma(), 0);
        assert_eq!(Bgr::WHITE.luma(), 255);
    }
}
