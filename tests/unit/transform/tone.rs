use super::*;

fn two_by_two() -> PixelBuffer {
    PixelBuffer::from_pixels(
        "img",
        2,
        2,
        vec![
            Rgb::new(10, 20, 30),
            Rgb::new(40, 50, 60),
            Rgb::new(70, 80, 90),
            Rgb::new(100, 110, 120),
        ],
    )
    .unwrap()
}

#[test]
fn brighten_by_50_on_two_by_two() {
    let out = brighten(50, &two_by_two());
    assert_eq!(
        out.pixels(),
        &[
            Rgb::new(60, 70, 80),
            Rgb::new(90, 100, 110),
            Rgb::new(120, 130, 140),
            Rgb::new(150, 160, 170),
        ]
    );
}

#[test]
fn brighten_zero_is_identity() {
    let src = two_by_two();
    assert_eq!(brighten(0, &src), src);
}

#[test]
fn brighten_saturates_and_is_lossy() {
    let src = PixelBuffer::from_pixels("s", 2, 1, vec![Rgb::new(250, 5, 128), Rgb::gray(0)])
        .unwrap();
    let up = brighten(20, &src);
    assert_eq!(up.get(0, 0), Rgb::new(255, 25, 148));
    assert_eq!(up.get(1, 0), Rgb::gray(20));

    let back = brighten(-20, &up);
    assert_eq!(back.get(0, 0), Rgb::new(235, 5, 128));
    assert_ne!(back, src);

    let dark = brighten(-100, &src);
    assert_eq!(dark.get(0, 0), Rgb::new(150, 0, 28));
}

#[test]
fn brighten_extreme_delta_does_not_overflow() {
    let src = two_by_two();
    assert!(
        brighten(i32::MAX, &src)
            .pixels()
            .iter()
            .all(|px| *px == Rgb::gray(255))
    );
    assert!(
        brighten(i32::MIN, &src)
            .pixels()
            .iter()
            .all(|px| *px == Rgb::BLACK)
    );
}

#[test]
fn sepia_matches_matrix_with_truncation() {
    let src = PixelBuffer::from_pixels("s", 1, 1, vec![Rgb::new(100, 50, 20)]).unwrap();
    // r: 39.3 + 38.45 + 3.78 = 81.53
    // g: 34.9 + 34.3 + 3.36 = 72.56
    // b: 27.2 + 26.7 + 2.62 = 56.52
    assert_eq!(sepia(&src).get(0, 0), Rgb::new(81, 72, 56));
}

#[test]
fn sepia_caps_at_255() {
    let src = PixelBuffer::from_pixels("s", 1, 1, vec![Rgb::gray(255)]).unwrap();
    // r and g exceed 255 before the cap; b = 0.937 * 255 = 238.935
    assert_eq!(sepia(&src).get(0, 0), Rgb::new(255, 255, 238));
}

#[test]
fn sepia_keeps_dimensions_and_input() {
    let src = two_by_two();
    let before = src.clone();
    let out = sepia(&src);
    assert_eq!(out.dimensions(), (2, 2));
    assert_eq!(src, before);
}
