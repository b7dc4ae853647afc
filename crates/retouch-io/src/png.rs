//! PNG image format support
//!
//! Decoding normalizes every PNG layout (palette, sub-byte depths,
//! 16-bit, alpha) to 8-bit samples before packing into a BGR raster.
//! Encoding always writes 8-bit RGB, so a raster round-trips through
//! PNG losslessly.

use crate::{IoError, IoResult};
use ::png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use retouch_core::{BYTES_PER_PIXEL, Raster};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = info.width;
    let height = info.height;
    let line_size = info.line_size;
    let data = &buf[..info.buffer_size()];

    let mut raster = Raster::new(width, height)?;

    // After normalize_to_color8 only 8-bit gray/gray-alpha/rgb/rgba remain
    let samples = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG layout after normalization: {:?}",
                other
            )));
        }
    };

    for y in 0..height {
        let src_row = &data[y as usize * line_size..];
        let dst_row = raster.row_pixels_mut(y);
        for x in 0..width as usize {
            let s = x * samples;
            let (r, g, b) = match samples {
                1 | 2 => (src_row[s], src_row[s], src_row[s]),
                _ => (src_row[s], src_row[s + 1], src_row[s + 2]),
            };
            let d = x * BYTES_PER_PIXEL;
            dst_row[d] = b;
            dst_row[d + 1] = g;
            dst_row[d + 2] = r;
        }
    }

    Ok(raster)
}

/// Write a PNG image as 8-bit RGB
pub fn write_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let bytes_per_row = width as usize * 3;
    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let src_row = raster.row_pixels(y);
        let dst_row = &mut data[y as usize * bytes_per_row..(y as usize + 1) * bytes_per_row];
        for x in 0..width as usize {
            let s = x * BYTES_PER_PIXEL;
            dst_row[s] = src_row[s + 2]; // R
            dst_row[s + 1] = src_row[s + 1]; // G
            dst_row[s + 2] = src_row[s]; // B
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use retouch_core::Bgr;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip() {
        let mut raster = Raster::new(10, 10).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                raster
                    .set(x, y, Bgr::new((x * 20) as u8, (y * 20) as u8, ((x + y) * 10) as u8))
                    .unwrap();
            }
        }

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_png_primary_colors() {
        let mut raster = Raster::new(3, 1).unwrap();
        raster.set(0, 0, Bgr::new(0, 0, 255)).unwrap(); // red
        raster.set(1, 0, Bgr::new(0, 255, 0)).unwrap(); // green
        raster.set(2, 0, Bgr::new(255, 0, 0)).unwrap(); // blue

        let mut buffer = Vec::new();
        write_png(&raster, &mut buffer).unwrap();

        let decoded = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(decoded.get(0, 0).unwrap(), Bgr::new(0, 0, 255));
        assert_eq!(decoded.get(1, 0).unwrap(), Bgr::new(0, 255, 0));
        assert_eq!(decoded.get(2, 0).unwrap(), Bgr::new(255, 0, 0));
    }

    #[test]
    fn test_png_rejects_garbage() {
        let garbage = vec![0x89, 0x50, 0x4E, 0x47, 0, 0, 0, 0, 1, 2, 3];
        assert!(matches!(
            read_png(Cursor::new(garbage)),
            Err(IoError::DecodeError(_))
        ));
    }
}
