use super::*;

fn sample(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn("sample", w, h, |x, y| {
        Rgb::new(
            ((x + 1) * 29 % 256) as i32,
            ((y + 3) * 53 % 256) as i32,
            ((x * y + 7) * 17 % 256) as i32,
        )
    })
    .unwrap()
}

#[test]
fn split_yields_red_green_blue_greyscales() {
    let src = sample(5, 3);
    let parts = split(&src);
    for y in 0..3 {
        for x in 0..5 {
            let p = src.get(x, y);
            assert_eq!(parts.red.get(x, y), Rgb::gray(p.r));
            assert_eq!(parts.green.get(x, y), Rgb::gray(p.g));
            assert_eq!(parts.blue.get(x, y), Rgb::gray(p.b));
        }
    }
}

#[test]
fn split_then_combine_reproduces_source() {
    for (w, h) in [(1, 1), (4, 3), (7, 8)] {
        let src = sample(w, h);
        let [r, g, b] = split(&src).into_array();
        let back = combine(&r, &g, &b).unwrap();
        assert_eq!(back.pixels(), src.pixels(), "{w}x{h}");
    }
}

#[test]
fn combine_picks_one_channel_from_each_source() {
    let r = PixelBuffer::from_pixels("r", 1, 1, vec![Rgb::new(1, 2, 3)]).unwrap();
    let g = PixelBuffer::from_pixels("g", 1, 1, vec![Rgb::new(4, 5, 6)]).unwrap();
    let b = PixelBuffer::from_pixels("b", 1, 1, vec![Rgb::new(7, 8, 9)]).unwrap();
    assert_eq!(combine(&r, &g, &b).unwrap().get(0, 0), Rgb::new(1, 5, 9));
}

#[test]
fn combine_rejects_mismatched_dimensions() {
    let a = sample(4, 3);
    let wide = sample(5, 3);
    let tall = sample(4, 4);
    assert!(matches!(
        combine(&a, &wide, &a),
        Err(PhotolabError::DimensionMismatch(_))
    ));
    assert!(matches!(
        combine(&a, &a, &tall),
        Err(PhotolabError::DimensionMismatch(_))
    ));
    assert!(combine(&tall, &a, &a).is_err());
}
