use glam::{Mat4, Vec3};

/// Angular position of orbit slot `i` out of `n`, in radians.
#[inline]
pub fn orbit_angle(i: usize, n: usize) -> f32 {
    (i as f32 / n as f32) * std::f32::consts::TAU
}

/// Rest position of sphere `i` on a fixed-radius circle in the XZ plane.
#[inline]
pub fn orbit_position(i: usize, n: usize, radius: f32) -> Vec3 {
    let angle = orbit_angle(i, n);
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Self-spin yaw for an orbiting sphere: linear in elapsed wall-clock time.
#[inline]
pub fn spin_yaw(elapsed_sec: f32, rate: f32) -> f32 {
    elapsed_sec * rate
}

/// Transform of the orbit group: translated down, tilted about X, yawed by
/// the scroll tween.
#[inline]
pub fn group_model(group_yaw: f32, tilt_x: f32, y_offset: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, y_offset, 0.0))
        * Mat4::from_rotation_x(tilt_x)
        * Mat4::from_rotation_y(group_yaw)
}

/// World transform of orbiting sphere `i`: group transform, then the fixed
/// orbit slot, then self-spin, then scale from the unit mesh.
#[inline]
pub fn sphere_model(
    group: Mat4,
    i: usize,
    n: usize,
    orbit_radius: f32,
    sphere_radius: f32,
    spin: f32,
) -> Mat4 {
    group
        * Mat4::from_translation(orbit_position(i, n, orbit_radius))
        * Mat4::from_rotation_y(spin)
        * Mat4::from_scale(Vec3::splat(sphere_radius))
}

/// World transform of the backdrop sphere (scaled unit mesh at the origin).
#[inline]
pub fn backdrop_model(radius: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(radius))
}
