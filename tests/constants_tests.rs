// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_dimensions_are_consistent() {
    // spheres must fit inside the backdrop and outside each other
    assert!(ORBIT_RADIUS + SPHERE_RADIUS < BACKDROP_RADIUS);
    assert!(SPHERE_RADIUS < ORBIT_RADIUS);
    // camera sits between the orbit and the backdrop shell
    assert!(CAMERA_Z > ORBIT_RADIUS);
    assert!(CAMERA_Z < BACKDROP_RADIUS);
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(BACKDROP_RADIUS < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_timings_are_positive_and_ordered() {
    assert!(WHEEL_COOLDOWN_MS > 0.0);
    assert!(SCROLL_TWEEN_DURATION_SEC > 0.0);
    // a tween always finishes before the next event can be accepted
    assert!(SCROLL_TWEEN_DURATION_SEC * 1000.0 <= WHEEL_COOLDOWN_MS);
    assert!(OVERLAY_FADE_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_steps_match_sphere_count() {
    assert_eq!(SCROLL_STEPS as usize, SPHERE_COUNT);
    // one step is a quarter turn, so a full cycle returns to the start
    assert!((SCROLL_STEPS as f64 * GROUP_YAW_STEP - std::f64::consts::TAU).abs() < 1e-12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tracked_asset_set_is_hdri_plus_sphere_textures() {
    assert_eq!(TRACKED_ASSET_COUNT, 1 + SPHERE_TEXTURE_URLS.len());
    assert_eq!(SPHERE_TEXTURE_URLS.len(), SPHERE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_caps_are_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(BACKDROP_OPACITY > 0.0 && BACKDROP_OPACITY <= 1.0);
    assert!(SPHERE_SEGMENTS >= 3);
    assert!(SPIN_RATE > 0.0);
}
