use super::*;
use std::io::Cursor;

fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_strip_image_rejects_zero_dims() {
    let err = StripImage::new(0, 4, &[]).unwrap_err();
    assert!(matches!(err, SenseError::EmptyImage { width: 0, height: 4 }));
}

#[test]
fn test_strip_image_rejects_wrong_length() {
    let data = vec![0u8; 10];
    let err = StripImage::new(2, 2, &data).unwrap_err();
    assert!(matches!(err, SenseError::InvalidImage(_)));
}

#[test]
fn test_strip_image_pixel_and_row_span() {
    let mut img = RgbImage::new(3, 2);
    img.put_pixel(1, 1, image::Rgb([10, 20, 30]));
    let view = StripImage::from_rgb(&img).unwrap();
    assert_eq!(view.width(), 3);
    assert_eq!(view.height(), 2);
    assert_eq!(view.pixel(1, 1), [10, 20, 30]);
    assert_eq!(view.row_span(1, 1, 2), &[10, 20, 30]);
}

#[test]
fn test_decode_png_bytes() {
    let img = RgbImage::from_pixel(8, 4, image::Rgb([200, 50, 50]));
    let decoded = decode_strip_bytes(&encode_png(&img)).unwrap();
    assert_eq!(decoded.dimensions(), (8, 4));
    assert_eq!(decoded.get_pixel(3, 2).0, [200, 50, 50]);
}

#[test]
fn test_decode_garbage_fails() {
    let err = decode_strip_bytes(b"not an image").unwrap_err();
    assert!(matches!(err, SenseError::Image(_)));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("sense_strip_missing_input_does_not_exist.png");
    let err = load_strip_image(&path).unwrap_err();
    assert!(matches!(err, SenseError::Io(_)));
}
