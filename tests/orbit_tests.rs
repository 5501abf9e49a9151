// Host-side tests for the pure orbit math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use constants::*;
use glam::Vec3;
use orbit::*;

#[test]
fn spheres_sit_at_equal_angular_spacing() {
    for i in 0..SPHERE_COUNT {
        let expected_angle = (i as f32 / SPHERE_COUNT as f32) * std::f32::consts::TAU;
        let p = orbit_position(i, SPHERE_COUNT, ORBIT_RADIUS);
        assert!(
            (p.x - ORBIT_RADIUS * expected_angle.cos()).abs() < 1e-5,
            "x mismatch for sphere {i}: {p:?}"
        );
        assert!(p.y.abs() < 1e-6, "orbit lies in the XZ plane");
        assert!(
            (p.z - ORBIT_RADIUS * expected_angle.sin()).abs() < 1e-5,
            "z mismatch for sphere {i}: {p:?}"
        );
    }
}

#[test]
fn all_spheres_are_on_the_orbit_circle() {
    for i in 0..SPHERE_COUNT {
        let p = orbit_position(i, SPHERE_COUNT, ORBIT_RADIUS);
        assert!((p.length() - ORBIT_RADIUS).abs() < 1e-4);
    }
}

#[test]
fn spin_yaw_is_linear_in_elapsed_time() {
    assert_eq!(spin_yaw(0.0, SPIN_RATE), 0.0);
    let a = spin_yaw(10.0, SPIN_RATE);
    let b = spin_yaw(20.0, SPIN_RATE);
    assert!((a - 10.0 * SPIN_RATE).abs() < 1e-6);
    assert!((b - 2.0 * a).abs() < 1e-6, "doubling time doubles yaw");
}

#[test]
fn sphere_model_places_center_on_orbit() {
    // Identity group: the mesh origin lands exactly on the orbit slot
    let group = group_model(0.0, 0.0, 0.0);
    for i in 0..SPHERE_COUNT {
        let m = sphere_model(group, i, SPHERE_COUNT, ORBIT_RADIUS, SPHERE_RADIUS, 0.37);
        let center = m.transform_point3(Vec3::ZERO);
        let expected = orbit_position(i, SPHERE_COUNT, ORBIT_RADIUS);
        assert!((center - expected).length() < 1e-4);
    }
}

#[test]
fn sphere_model_scales_unit_mesh_to_sphere_radius() {
    let group = group_model(0.0, 0.0, 0.0);
    let m = sphere_model(group, 0, SPHERE_COUNT, ORBIT_RADIUS, SPHERE_RADIUS, 0.0);
    let center = m.transform_point3(Vec3::ZERO);
    let surface = m.transform_point3(Vec3::Y);
    assert!(((surface - center).length() - SPHERE_RADIUS).abs() < 1e-4);
}

#[test]
fn group_model_applies_vertical_offset() {
    let group = group_model(0.0, GROUP_TILT_X, GROUP_Y_OFFSET);
    let origin = group.transform_point3(Vec3::ZERO);
    assert!((origin.y - GROUP_Y_OFFSET).abs() < 1e-6);
    assert!(origin.x.abs() < 1e-6 && origin.z.abs() < 1e-6);
}

#[test]
fn group_yaw_quarter_turn_advances_spheres_one_slot() {
    // Rotating the group by -90 degrees moves each sphere onto the next
    // slot's position (the scroll animation's end state)
    let yawed = group_model(-std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    for i in 0..SPHERE_COUNT {
        let moved = yawed.transform_point3(orbit_position(i, SPHERE_COUNT, ORBIT_RADIUS));
        let next = orbit_position((i + 1) % SPHERE_COUNT, SPHERE_COUNT, ORBIT_RADIUS);
        assert!(
            (moved - next).length() < 1e-4,
            "sphere {i} should land on slot {}",
            (i + 1) % SPHERE_COUNT
        );
    }
}

#[test]
fn backdrop_model_is_a_pure_scale() {
    let m = backdrop_model(BACKDROP_RADIUS);
    assert!((m.transform_point3(Vec3::X).length() - BACKDROP_RADIUS).abs() < 1e-3);
    assert!(m.transform_point3(Vec3::ZERO).length() < 1e-6);
}
