use super::*;

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(0.2, 0.8, 0.0), 0.2);
    assert!((lerp(0.2, 0.8, 1.0) - 0.8).abs() < 1e-12);
    assert!((lerp(0.2, 0.8, 0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn clamp_elapsed_caps_long_gaps() {
    assert_eq!(clamp_elapsed(5.0, 17.0), 5.0);
    assert_eq!(clamp_elapsed(500.0, 17.0), 17.0);
    assert_eq!(clamp_elapsed(-3.0, 17.0), 0.0);
    assert_eq!(clamp_elapsed(f64::NAN, 17.0), 17.0);
}
