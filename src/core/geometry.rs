use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Build a unit UV sphere with `segments` bands in both latitude and
/// longitude. All entities share this mesh and scale it via their model
/// matrix.
pub fn unit_sphere(segments: u32) -> SphereMesh {
    let segs = segments.max(3);
    let ring = segs + 1;
    let mut vertices = Vec::with_capacity((ring * ring) as usize);
    for y in 0..=segs {
        let v = y as f32 / segs as f32;
        let theta = v * std::f32::consts::PI;
        for x in 0..=segs {
            let u = x as f32 / segs as f32;
            let phi = u * std::f32::consts::TAU;
            let n = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            vertices.push(Vertex {
                position: n.to_array(),
                normal: n.to_array(),
                uv: [1.0 - u, v],
            });
        }
    }
    let mut indices = Vec::with_capacity((segs * segs * 6) as usize);
    for y in 0..segs {
        for x in 0..segs {
            let a = y * ring + x;
            let b = a + ring;
            // counter-clockwise when viewed from outside the sphere
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    SphereMesh { vertices, indices }
}
