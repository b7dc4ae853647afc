//! JPEG image format support
//!
//! Reads baseline and progressive JPEG via the `jpeg-decoder` crate
//! (8-bit grayscale and RGB; CMYK is rejected). Writes via the
//! `jpeg-encoder` crate, which accepts interleaved BGR rows directly.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use retouch_core::{BYTES_PER_PIXEL, Raster};
use std::io::{Read, Write};

/// Encoder quality used when the caller does not specify one.
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Read a JPEG image
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG frame info".to_string()))?;

    let width = u32::from(info.width);
    let height = u32::from(info.height);
    let mut raster = Raster::new(width, height)?;

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                let src_row = &pixels[y as usize * width as usize..];
                let dst_row = raster.row_pixels_mut(y);
                for x in 0..width as usize {
                    let v = src_row[x];
                    let d = x * BYTES_PER_PIXEL;
                    dst_row[d] = v;
                    dst_row[d + 1] = v;
                    dst_row[d + 2] = v;
                }
            }
        }
        PixelFormat::RGB24 => {
            let src_stride = width as usize * 3;
            for y in 0..height {
                let src_row = &pixels[y as usize * src_stride..];
                let dst_row = raster.row_pixels_mut(y);
                for x in 0..width as usize {
                    let s = x * 3;
                    let d = x * BYTES_PER_PIXEL;
                    dst_row[d] = src_row[s + 2]; // B
                    dst_row[d + 1] = src_row[s + 1]; // G
                    dst_row[d + 2] = src_row[s]; // R
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    }

    Ok(raster)
}

/// Write a JPEG image at the given quality (1-100)
pub fn write_jpeg<W: Write>(raster: &Raster, mut writer: W, quality: u8) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(IoError::EncodeError(format!(
            "{}x{} exceeds the JPEG dimension limit of 65535",
            width, height
        )));
    }

    // The encoder wants tightly packed rows; drop any stride padding
    let mut data = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
    for y in 0..height {
        data.extend_from_slice(raster.row_pixels(y));
    }

    let mut jpeg_buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut jpeg_buf, quality);
    encoder
        .encode(
            &data,
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Bgr,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;

    writer.write_all(&jpeg_buf).map_err(IoError::Io)?;
    Ok(())
}
