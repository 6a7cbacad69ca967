use dew_point_explorer::psychro::{
    absolute_humidity, dew_point_from_rh, relative_humidity, relative_humidity_from_content,
    sample_curve, saturation_vapor_pressure, IntersectionPoint, DOMAIN_MAX_C, DOMAIN_MIN_C,
};
use proptest::prelude::*;

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn absolute_humidity_reference_points() {
    assert!(approx(absolute_humidity(20.0), 17.2415, 1e-3), "{}", absolute_humidity(20.0));
    assert!(approx(absolute_humidity(10.0), 9.3823, 1e-3), "{}", absolute_humidity(10.0));
    assert!(approx(absolute_humidity(0.0), 4.8485, 1e-3), "{}", absolute_humidity(0.0));
    assert!(approx(absolute_humidity(-45.0), 0.1061, 1e-3), "{}", absolute_humidity(-45.0));
    assert!(approx(absolute_humidity(60.0), 130.04, 0.05), "{}", absolute_humidity(60.0));
}

#[test]
fn saturation_pressure_at_freezing_equals_alpha() {
    assert!(approx(saturation_vapor_pressure(0.0), 6.112, 1e-12));
}

#[test]
fn relative_humidity_twenty_over_ten() {
    let rh = relative_humidity(20.0, 10.0);
    assert!(approx(rh, 52.56, 0.05), "rh={rh}");
    assert!(approx(relative_humidity(15.0, 15.0), 100.0, 1e-9));
}

#[test]
fn dew_point_inverse_at_full_saturation() {
    for t in [-30.0, 0.0, 12.5, 35.0] {
        assert!(approx(dew_point_from_rh(t, 100.0), t, 1e-9));
    }
}

#[test]
fn dew_point_from_zero_rh_is_not_finite() {
    assert!(!dew_point_from_rh(20.0, 0.0).is_finite());
}

#[test]
fn content_ratio_rejects_bad_maximum() {
    assert_eq!(relative_humidity_from_content(5.0, 0.0), None);
    assert_eq!(relative_humidity_from_content(f64::NAN, 10.0), None);
    let rh = relative_humidity_from_content(5.0, 10.0).expect("finite ratio");
    assert!(approx(rh, 50.0, 1e-12));
}

#[test]
fn sample_curve_covers_domain_in_quarter_steps() {
    let curve = sample_curve();
    assert_eq!(curve.len(), 421);
    assert_eq!(curve.temperatures().first().copied(), Some(DOMAIN_MIN_C));
    assert!(approx(*curve.temperatures().last().expect("last"), DOMAIN_MAX_C, 1e-9));
    assert!(curve.humidities().iter().all(|h| h.is_finite() && *h > 0.0));
    assert!(curve
        .humidities()
        .windows(2)
        .all(|w| w[1] > w[0]));
}

#[test]
fn intersection_uses_content_ratio() {
    let p = IntersectionPoint::compute(20.0, 10.0).expect("intersection");
    assert!(approx(p.humidity, 9.3823, 1e-3));
    assert!(approx(p.max_humidity, 17.2415, 1e-3));
    assert!(approx(p.relative_humidity, 54.417, 0.01), "rh={}", p.relative_humidity);
}

#[test]
fn intersection_outside_domain_is_none() {
    assert!(IntersectionPoint::compute(60.1, 10.0).is_none());
    assert!(IntersectionPoint::compute(20.0, -45.1).is_none());
    assert!(IntersectionPoint::compute(f64::NAN, 10.0).is_none());
}

proptest! {
    #[test]
    fn humidity_positive_and_increasing(t in -45.0f64..59.0, dt in 0.01f64..1.0) {
        let a = absolute_humidity(t);
        let b = absolute_humidity(t + dt);
        prop_assert!(a > 0.0);
        prop_assert!(b > a);
    }

    #[test]
    fn rh_and_dew_point_round_trip(t in -45.0f64..60.0, gap in 0.0f64..30.0) {
        let td = (t - gap).max(-45.0);
        let rh = relative_humidity(t, td);
        prop_assert!(rh > 0.0 && rh <= 100.0 + 1e-9);
        let back = dew_point_from_rh(t, rh);
        prop_assert!((back - td).abs() < 1e-6, "t={} td={} back={}", t, td, back);
    }
}
