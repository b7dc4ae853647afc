//! retouch-io - the format bridge
//!
//! Everything that crosses the boundary between a [`Raster`] and the
//! outside world lives here:
//!
//! - Encoded files: PNG, JPEG, and BMP codecs with magic-number
//!   detection ([`decode_image`] / [`encode_image`] and the path
//!   helpers [`read_image`] / [`write_image`])
//! - The display side: [`to_display`] / [`from_display`] translate
//!   between rasters and the bitmap representation a windowing shell
//!   renders
//!
//! All conversions are pure transcoding; nothing in this crate holds
//! state.

pub mod bmp;
pub mod display;
mod error;
pub mod format;
pub mod jpeg;
pub mod png;

pub use display::{DISPLAY_DPI, DisplayBitmap, DisplayFormat, from_display, to_display};
pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use retouch_core::Raster;
use std::io::Cursor;
use std::path::Path;

/// Decode encoded image bytes into a raster, detecting the container
/// format from the header.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for an unrecognized header
/// and [`IoError::DecodeError`] / [`IoError::InvalidData`] for
/// malformed content.
pub fn decode_image(bytes: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(bytes)?;
    log::debug!(
        "decoding {} bytes as {}",
        bytes.len(),
        format.extension()
    );
    match format {
        ImageFormat::Png => png::read_png(Cursor::new(bytes)),
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(bytes)),
        ImageFormat::Bmp => bmp::read_bmp(Cursor::new(bytes)),
    }
}

/// Encode a raster into the requested container format.
pub fn encode_image(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    log::debug!(
        "encoding {}x{} raster as {}",
        raster.width(),
        raster.height(),
        format.extension()
    );
    let mut out = Vec::new();
    match format {
        ImageFormat::Png => png::write_png(raster, &mut out)?,
        ImageFormat::Jpeg => jpeg::write_jpeg(raster, &mut out, jpeg::DEFAULT_JPEG_QUALITY)?,
        ImageFormat::Bmp => bmp::write_bmp(raster, &mut out)?,
    }
    Ok(out)
}

/// Read and decode an image file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Encode and write an image file in the given format.
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let bytes = encode_image(raster, format)?;
    std::fs::write(path, bytes).map_err(IoError::Io)
}
