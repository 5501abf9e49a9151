// Host-side tests for the UV sphere mesh generator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod geometry {
    include!("../src/core/geometry.rs");
}

use geometry::unit_sphere;

#[test]
fn vertex_and_index_counts_match_segment_count() {
    for segs in [3u32, 8, 64] {
        let mesh = unit_sphere(segs);
        let ring = (segs + 1) as usize;
        assert_eq!(mesh.vertices.len(), ring * ring);
        assert_eq!(mesh.indices.len(), (segs * segs * 6) as usize);
    }
}

#[test]
fn positions_lie_on_the_unit_sphere() {
    let mesh = unit_sphere(16);
    for v in &mesh.vertices {
        let len = glam::Vec3::from_array(v.position).length();
        assert!((len - 1.0).abs() < 1e-5, "off-sphere vertex: {v:?}");
    }
}

#[test]
fn normals_are_unit_and_radial() {
    let mesh = unit_sphere(16);
    for v in &mesh.vertices {
        let n = glam::Vec3::from_array(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-5);
        // for a sphere centered at the origin, normal == position
        assert!((n - glam::Vec3::from_array(v.position)).length() < 1e-6);
    }
}

#[test]
fn uvs_cover_the_unit_square() {
    let mesh = unit_sphere(16);
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn indices_are_in_range_and_form_whole_triangles() {
    let mesh = unit_sphere(12);
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of range ({n} vertices)");
    }
}

#[test]
fn degenerate_segment_count_is_clamped() {
    let mesh = unit_sphere(1);
    assert!(!mesh.vertices.is_empty());
    assert!(!mesh.indices.is_empty());
}
