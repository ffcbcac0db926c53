use super::*;

#[test]
fn clamp_channel_saturates_both_ends() {
    assert_eq!(clamp_channel(-7), 0);
    assert_eq!(clamp_channel(0), 0);
    assert_eq!(clamp_channel(128), 128);
    assert_eq!(clamp_channel(270), 255);
}

#[test]
fn clamp_channel_f64_truncates_toward_zero() {
    assert_eq!(clamp_channel_f64(12.99), 12);
    assert_eq!(clamp_channel_f64(-0.9), 0);
    assert_eq!(clamp_channel_f64(300.5), 255);
    assert_eq!(clamp_channel_f64(f64::NAN), 0);
}

#[test]
fn to_rgb8_clamps_out_of_range_channels() {
    assert_eq!(Rgb::new(-3, 100, 999).to_rgb8(), [0, 100, 255]);
}

#[test]
fn array_conversions_keep_channel_order() {
    let px = Rgb::from_array([1, 2, 3]);
    assert_eq!(px, Rgb::new(1, 2, 3));
    assert_eq!(px.to_array(), [1, 2, 3]);
    assert_eq!(Rgb::from([9u8, 8, 7]), Rgb::new(9, 8, 7));
    assert_eq!(Rgb::gray(4), Rgb::new(4, 4, 4));
}
