use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_centered_stays_in_extent() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_centered(7.5);
        assert!((-7.5..7.5).contains(&v));
    }
}

#[test]
fn map_linear_handles_degenerate_span() {
    assert!((map_linear(0.05, -0.1, 0.1, -1.0, 1.0) - 0.5).abs() < 1e-12);
    assert_eq!(map_linear(3.0, 1.0, 1.0, 4.0, 9.0), 4.0);
}

#[test]
fn clamp_finite_maps_nan_and_infinities() {
    assert_eq!(clamp_finite(f64::NAN, 10.0, 2.0), 2.0);
    assert_eq!(clamp_finite(f64::INFINITY, 10.0, 0.0), 10.0);
    assert_eq!(clamp_finite(f64::NEG_INFINITY, 10.0, 0.0), -10.0);
    assert_eq!(clamp_finite(3.0, 10.0, 0.0), 3.0);
}
