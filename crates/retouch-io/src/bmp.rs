//! BMP image format support
//!
//! Reads and writes uncompressed Windows Bitmap files. BMP stores
//! samples blue-first, matching the raster layout, so 24 bpp data
//! passes straight through; 32 bpp input drops its alpha byte.

use crate::{IoError, IoResult};
use retouch_core::{BYTES_PER_PIXEL, Raster};
use std::io::{Read, Write};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Raster> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(IoError::Io)?;

    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }

    let pixel_offset = u32::from_le_bytes([
        file_header[10],
        file_header[11],
        file_header[12],
        file_header[13],
    ]) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; 40];
    reader.read_exact(&mut info_header).map_err(IoError::Io)?;

    let header_size = u32::from_le_bytes([
        info_header[0],
        info_header[1],
        info_header[2],
        info_header[3],
    ]);

    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = i32::from_le_bytes([
        info_header[4],
        info_header[5],
        info_header[6],
        info_header[7],
    ]);

    let height = i32::from_le_bytes([
        info_header[8],
        info_header[9],
        info_header[10],
        info_header[11],
    ]);

    let planes = u16::from_le_bytes([info_header[12], info_header[13]]);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = u16::from_le_bytes([info_header[14], info_header[15]]);

    let compression = u32::from_le_bytes([
        info_header[16],
        info_header[17],
        info_header[18],
        info_header[19],
    ]);

    // BI_RGB or BI_BITFIELDS only
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    if bits_per_pixel != 24 && bits_per_pixel != 32 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    // Skip any extended header and optional color masks before the pixel data
    let current_pos = BMP_FILE_HEADER_SIZE + header_size as usize;
    if pixel_offset > current_pos {
        let mut skip = vec![0u8; pixel_offset - current_pos];
        reader.read_exact(&mut skip).map_err(IoError::Io)?;
    }

    let mut raster = Raster::new(width, height)?;

    // BMP rows are 4-byte aligned
    let row_stride = ((width as usize * bits_per_pixel as usize + 31) / 32) * 4;
    let mut row_buffer = vec![0u8; row_stride];

    for row in 0..height {
        reader.read_exact(&mut row_buffer).map_err(IoError::Io)?;

        let y = if top_down { row } else { height - 1 - row };
        let dst_row = raster.row_pixels_mut(y);

        match bits_per_pixel {
            24 => {
                dst_row.copy_from_slice(&row_buffer[..width as usize * 3]);
            }
            32 => {
                for x in 0..width as usize {
                    let s = x * 4;
                    let d = x * BYTES_PER_PIXEL;
                    dst_row[d] = row_buffer[s];
                    dst_row[d + 1] = row_buffer[s + 1];
                    dst_row[d + 2] = row_buffer[s + 2];
                    // alpha byte dropped
                }
            }
            _ => unreachable!(),
        }
    }

    Ok(raster)
}

/// Write a BMP image as 24 bpp uncompressed
pub fn write_bmp<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    let width = raster.width();
    let height = raster.height();

    let row_stride = ((width as usize * 24 + 31) / 32) * 4;
    let pixel_data_size = row_stride * height as usize;
    let pixel_offset = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let file_size = pixel_offset + pixel_data_size;

    // File header
    writer.write_all(b"BM").map_err(IoError::Io)?;
    writer
        .write_all(&(file_size as u32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&[0u8; 4]).map_err(IoError::Io)?; // Reserved
    writer
        .write_all(&(pixel_offset as u32).to_le_bytes())
        .map_err(IoError::Io)?;

    // Info header
    writer
        .write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&(width as i32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer
        .write_all(&(height as i32).to_le_bytes())
        .map_err(IoError::Io)?; // Bottom-up
    writer.write_all(&1u16.to_le_bytes()).map_err(IoError::Io)?; // Planes
    writer
        .write_all(&24u16.to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Compression
    writer
        .write_all(&(pixel_data_size as u32).to_le_bytes())
        .map_err(IoError::Io)?;
    writer.write_all(&0i32.to_le_bytes()).map_err(IoError::Io)?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes()).map_err(IoError::Io)?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Colors used
    writer.write_all(&0u32.to_le_bytes()).map_err(IoError::Io)?; // Important colors

    // Pixel data, bottom-up
    let mut row_buffer = vec![0u8; row_stride];
    for row in 0..height {
        let y = height - 1 - row;
        let src_row = raster.row_pixels(y);
        row_buffer[..src_row.len()].copy_from_slice(src_row);
        writer.write_all(&row_buffer).map_err(IoError::Io)?;
    }

    Ok(())
}
