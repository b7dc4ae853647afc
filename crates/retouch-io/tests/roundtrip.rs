//! Format dispatch and full encode/decode round-trips

use retouch_core::{Bgr, Raster};
use retouch_io::{ImageFormat, IoError, decode_image, encode_image, read_image, write_image};

fn gradient(w: u32, h: u32) -> Raster {
    let mut r = Raster::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            r.set(x, y, Bgr::new((x * 7) as u8, (y * 11) as u8, ((x ^ y) * 3) as u8))
                .unwrap();
        }
    }
    r
}

#[test]
fn test_png_roundtrip_is_lossless() {
    let raster = gradient(20, 15);
    let bytes = encode_image(&raster, ImageFormat::Png).unwrap();
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(decoded, raster);
}

#[test]
fn test_bmp_roundtrip_is_lossless() {
    let raster = gradient(17, 9);
    let bytes = encode_image(&raster, ImageFormat::Bmp).unwrap();
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(decoded, raster);
}

#[test]
fn test_jpeg_roundtrip_keeps_dimensions() {
    let raster = gradient(24, 18);
    let bytes = encode_image(&raster, ImageFormat::Jpeg).unwrap();
    let decoded = decode_image(&bytes).unwrap();
    assert_eq!(decoded.width(), 24);
    assert_eq!(decoded.height(), 18);
}

#[test]
fn test_encoded_bytes_carry_their_magic() {
    let raster = gradient(4, 4);
    for format in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp] {
        let bytes = encode_image(&raster, format).unwrap();
        assert_eq!(
            retouch_io::detect_format_from_bytes(&bytes).unwrap(),
            format
        );
    }
}

#[test]
fn test_decode_rejects_unknown_bytes() {
    assert!(matches!(
        decode_image(b"not an image at all"),
        Err(IoError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_file_roundtrip() {
    let raster = gradient(8, 8);
    let path = std::env::temp_dir().join("retouch_io_roundtrip.png");

    write_image(&raster, &path, ImageFormat::Png).unwrap();
    let decoded = read_image(&path).unwrap();
    assert_eq!(decoded, raster);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_read_missing_file() {
    let missing = std::env::temp_dir().join("retouch_io_does_not_exist.png");
    assert!(matches!(read_image(&missing), Err(IoError::Io(_))));
}
