// Host-side tests for viewport math shared by the resize handler.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod view {
    include!("../src/core/view.rs");
}

use view::*;

#[test]
fn aspect_is_exactly_width_over_height() {
    assert_eq!(aspect_ratio(1920, 1080), 1920.0 / 1080.0);
    assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
    assert_eq!(aspect_ratio(1, 1), 1.0);
}

#[test]
fn aspect_survives_zero_height() {
    assert_eq!(aspect_ratio(640, 0), 640.0);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(clamped_pixel_ratio(1.0, 2.0), 1.0);
    assert_eq!(clamped_pixel_ratio(1.5, 2.0), 1.5);
    assert_eq!(clamped_pixel_ratio(2.0, 2.0), 2.0);
    assert_eq!(clamped_pixel_ratio(3.0, 2.0), 2.0);
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 2.0), 1);
    assert_eq!(backing_size(0.4, 1.0), 1);
    assert_eq!(backing_size(1024.0, 2.0), 2048);
}
