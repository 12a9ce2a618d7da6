use sri_scoring::normal::{cdf, inverse_cdf};

#[test]
fn cdf_reference_points() {
    assert!((cdf(0.0) - 0.5).abs() < 1e-7);
    assert!((cdf(1.0) - 0.841_344_7).abs() < 1e-6);
    assert!((cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
    assert!(cdf(8.0) > 0.999_999);
    assert!(cdf(-8.0) < 1e-6);
}

#[test]
fn cdf_is_monotonic() {
    let mut previous = 0.0;
    for i in -60..=60 {
        let value = cdf(f64::from(i) / 10.0);
        assert!(value >= previous);
        previous = value;
    }
}

#[test]
fn inverse_undoes_cdf() {
    for p in [0.0001, 0.01, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99, 0.9999] {
        let z = inverse_cdf(p);
        assert!((cdf(z) - p).abs() < 1e-6, "p {p} z {z}");
    }
}

#[test]
fn inverse_bounds() {
    assert_eq!(inverse_cdf(0.0), f64::NEG_INFINITY);
    assert_eq!(inverse_cdf(1.0), f64::INFINITY);
    assert!(inverse_cdf(1.5).is_nan());
    assert!(inverse_cdf(-0.1).is_nan());
    assert!(inverse_cdf(0.5).abs() < 1e-9);
}
