use super::*;

#[test]
fn linear_interpolation_law() {
    let y = Interpolate::linear([0.0, 1.0], [0.0, 200.0]).unwrap();
    assert_eq!(y.map(0.0), 0.0);
    assert_eq!(y.map(1.0), 200.0);
    assert_eq!(y.map(0.5), 100.0);
}

#[test]
fn clamps_outside_domain() {
    let opacity = Interpolate::linear([0.0, 0.5], [1.0, 0.0]).unwrap();
    assert_eq!(opacity.map(-1.0), 1.0);
    assert_eq!(opacity.map(0.25), 0.5);
    assert_eq!(opacity.map(0.9), 0.0);
    assert_eq!(opacity.map(f64::NAN), 1.0);
}

#[test]
fn multi_segment_is_monotonic_per_segment() {
    let m = Interpolate::new(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0]).unwrap();
    let rising: Vec<f64> = (0..=5).map(|i| m.map(f64::from(i) / 10.0)).collect();
    assert!(rising.windows(2).all(|w| w[0] <= w[1]));
    let falling: Vec<f64> = (5..=10).map(|i| m.map(f64::from(i) / 10.0)).collect();
    assert!(falling.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(m.map(0.75), 5.0);
}

#[test]
fn rejects_bad_breakpoints() {
    assert!(Interpolate::new(&[0.0], &[1.0]).is_err());
    assert!(Interpolate::new(&[0.0, 1.0], &[1.0]).is_err());
    assert!(Interpolate::new(&[0.0, 0.0], &[1.0, 2.0]).is_err());
    assert!(Interpolate::new(&[1.0, 0.0], &[1.0, 2.0]).is_err());
    assert!(Interpolate::new(&[0.0, f64::INFINITY], &[1.0, 2.0]).is_err());
}
