// Host-side tests for the tween engine and the scroll-step target rule.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

#[test]
fn tween_clamps_to_endpoints_outside_its_window() {
    let t = Tween::new(0.0, -100.0, 5.0, 1.0, Ease::QuadInOut);
    assert_eq!(t.sample(0.0), 0.0, "before start");
    assert_eq!(t.sample(5.0), 0.0, "at start");
    assert_eq!(t.sample(6.0), -100.0, "at end");
    assert_eq!(t.sample(100.0), -100.0, "long after end");
}

#[test]
fn quad_in_out_is_symmetric_about_the_midpoint() {
    let t = Tween::new(0.0, 1.0, 0.0, 1.0, Ease::QuadInOut);
    assert!((t.sample(0.5) - 0.5).abs() < 1e-12);
    for k in 1..10 {
        let dt = k as f64 * 0.05;
        let lo = t.sample(0.5 - dt);
        let hi = t.sample(0.5 + dt);
        assert!((lo + hi - 1.0).abs() < 1e-12, "asymmetric at ±{dt}");
    }
}

#[test]
fn eased_progress_is_monotone() {
    for ease in [Ease::QuadInOut, Ease::ExpoInOut] {
        let t = Tween::new(0.0, 1.0, 0.0, 1.0, ease);
        let mut prev = t.sample(0.0);
        for k in 1..=100 {
            let v = t.sample(k as f64 / 100.0);
            assert!(v >= prev, "{ease:?} not monotone at step {k}");
            prev = v;
        }
        assert!((prev - 1.0).abs() < 1e-9);
    }
}

#[test]
fn expo_in_out_hits_exact_endpoints() {
    assert_eq!(Ease::ExpoInOut.apply(0.0), 0.0);
    assert_eq!(Ease::ExpoInOut.apply(1.0), 1.0);
    assert!((Ease::ExpoInOut.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn finished_tracks_the_duration() {
    let t = Tween::new(0.0, 1.0, 2.0, 1.0, Ease::QuadInOut);
    assert!(!t.finished(2.0));
    assert!(!t.finished(2.999));
    assert!(t.finished(3.0));
}

#[test]
fn zero_duration_tween_is_immediately_at_its_target() {
    let t = Tween::new(3.0, 7.0, 0.0, 0.0, Ease::QuadInOut);
    assert_eq!(t.sample(0.0), 7.0);
    assert!(t.finished(0.0));
}

#[test]
fn heading_steps_down_then_snaps_back_on_wrap() {
    // counter sequence after four accepted scrolls: 1, 2, 3, 0
    let mut offset = 0.0;
    for count in [1u8, 2, 3] {
        offset = heading_target(offset, count, 100.0);
    }
    assert_eq!(offset, -300.0);
    // wrap: the override tween returns the headings to the origin
    assert_eq!(heading_target(offset, 0, 100.0), 0.0);
}
