// Host-side tests for the wheel throttle gate.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::ScrollThrottle;

const COOLDOWN: f64 = 2000.0;

#[test]
fn first_event_is_always_accepted() {
    let mut t = ScrollThrottle::new(COOLDOWN, 4);
    assert_eq!(t.accept(0.0), Some(1));
}

#[test]
fn counter_cycles_through_four_steps() {
    let mut t = ScrollThrottle::new(COOLDOWN, 4);
    let mut seen = Vec::new();
    for k in 0..8 {
        let now = k as f64 * COOLDOWN;
        seen.push(t.accept(now).expect("spaced events are accepted"));
    }
    assert_eq!(seen, vec![1, 2, 3, 0, 1, 2, 3, 0]);
}

#[test]
fn counter_never_leaves_range() {
    let mut t = ScrollThrottle::new(COOLDOWN, 4);
    for k in 0..1000 {
        if let Some(c) = t.accept(k as f64 * 3000.0) {
            assert!(c < 4, "counter escaped [0,4): {c}");
        }
        assert!(t.count() < 4);
    }
}

#[test]
fn events_inside_cooldown_are_dropped_without_side_effect() {
    let mut t = ScrollThrottle::new(COOLDOWN, 4);
    assert_eq!(t.accept(10_000.0), Some(1));
    // a burst well inside the window: all no-ops
    for dt in [1.0, 100.0, 1000.0, 1999.0] {
        assert_eq!(t.accept(10_000.0 + dt), None);
        assert_eq!(t.count(), 1, "dropped event mutated the counter");
    }
    // the window is measured from the last ACCEPTED event
    assert_eq!(t.accept(12_000.0), Some(2));
}

#[test]
fn exact_cooldown_boundary_is_accepted() {
    let mut t = ScrollThrottle::new(COOLDOWN, 4);
    assert_eq!(t.accept(0.0), Some(1));
    assert_eq!(t.accept(COOLDOWN - 0.001), None);
    assert_eq!(t.accept(COOLDOWN), Some(2));
}
