use super::*;

fn sample() -> PixelBuffer {
    PixelBuffer::from_fn("s", 3, 2, |x, y| {
        Rgb::new(x as i32 * 80, y as i32 * 200, 17)
    })
    .unwrap()
}

#[test]
fn png_is_lossless() {
    let src = sample();
    let bytes = encode_compressed(&src, image::ImageFormat::Png).unwrap();
    let back = decode_compressed(&bytes, image::ImageFormat::Png, "back").unwrap();
    assert_eq!(back.name(), "back");
    assert_eq!(back.pixels(), src.pixels());
}

#[test]
fn png_decode_drops_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();

    let decoded = decode_compressed(&buf, image::ImageFormat::Png, "a").unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.get(0, 0), Rgb::new(100, 50, 200));
}

#[test]
fn jpeg_keeps_dimensions() {
    let src = sample();
    let bytes = encode_compressed(&src, image::ImageFormat::Jpeg).unwrap();
    let back = decode_compressed(&bytes, image::ImageFormat::Jpeg, "j").unwrap();
    assert_eq!(back.dimensions(), src.dimensions());
}

#[test]
fn encode_clamps_out_of_range_channels() {
    let src = PixelBuffer::from_pixels("o", 1, 1, vec![Rgb::new(-4, 300, 9)]).unwrap();
    let bytes = encode_compressed(&src, image::ImageFormat::Png).unwrap();
    let back = decode_compressed(&bytes, image::ImageFormat::Png, "o").unwrap();
    assert_eq!(back.get(0, 0), Rgb::new(0, 255, 9));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    assert!(decode_compressed(b"not a png", image::ImageFormat::Png, "g").is_err());
}
