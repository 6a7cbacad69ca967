use dew_point_explorer::viewport::{recentre, Viewport, ViewportController};

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn default_viewport_matches_home_view() {
    let v = Viewport::default();
    assert_eq!(v.x_range, [-10.0, 40.0]);
    assert_eq!(v.y_range, [0.0, 50.0]);
}

#[test]
fn recentre_twenty_over_ten() {
    let v = recentre(20.0, 10.0).expect("finite");
    // 여백 8 °C: 왼쪽 ×1.5, 오른쪽 ×0.8
    assert!(approx(v.x_min(), -2.0, 1e-9), "{v:?}");
    assert!(approx(v.x_max(), 26.4, 1e-9), "{v:?}");
    assert!(approx(v.y_max(), 17.2415 + 3.1437, 2e-3), "{v:?}");
    assert_eq!(v.y_range[0], 0.0);
}

#[test]
fn recentre_clamps_to_domain() {
    let v = recentre(60.0, -45.0).expect("finite");
    assert_eq!(v.x_min(), -45.0);
    assert_eq!(v.x_max(), 60.0);
}

#[test]
fn auto_adjust_is_idempotent() {
    let mut c = ViewportController::default();
    assert!(c.auto_adjust(20.0, 10.0));
    let first = c.current();
    assert!(!c.auto_adjust(20.0, 10.0));
    assert_eq!(c.current(), first);
}

#[test]
fn small_changes_do_not_move_the_view() {
    let mut c = ViewportController::default();
    c.auto_adjust(20.0, 10.0);
    let before = c.current();
    // 폭과 y 상한 변화가 임계값 이하
    assert!(!c.auto_adjust(20.1, 10.0));
    assert_eq!(c.current(), before);
}

#[test]
fn manual_bounds_replace_view_and_pin_y_min() {
    let mut c = ViewportController::default();
    assert!(c.apply_manual(0.0, 30.0, 5.0, 25.0));
    let v = c.current();
    assert_eq!(v.x_range, [0.0, 30.0]);
    assert_eq!(v.y_range, [0.0, 25.0]);
}

#[test]
fn invalid_manual_bounds_are_ignored() {
    let mut c = ViewportController::default();
    let before = c.current();
    assert!(!c.apply_manual(10.0, 10.0, 0.0, 20.0));
    assert!(!c.apply_manual(0.0, 20.0, 0.0, 0.0));
    assert!(!c.apply_manual(f64::NAN, 20.0, 0.0, 20.0));
    assert_eq!(c.current(), before);
}

#[test]
fn reset_returns_home() {
    let home = Viewport::new(-20.0, 20.0, 30.0);
    let mut c = ViewportController::new(home);
    c.auto_adjust(35.0, 5.0);
    assert_ne!(c.current(), home);
    c.reset();
    assert_eq!(c.current(), home);
}
