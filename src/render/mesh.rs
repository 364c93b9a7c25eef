//! Mesh and vertex definitions
//!
//! Unit-sized procedural primitives; object builders size and place
//! them through model transforms.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use std::f32::consts::PI;

/// Identifies one of the shared primitive meshes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Plane,
    Box,
    Cylinder,
    Sphere,
    Torus,
}

/// Vertex with position, normal, and UV coordinates
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    /// Get the vertex buffer layout for wgpu
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // Normal
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                // UV
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// A 3D mesh with vertices and indices
#[derive(Debug)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// GPU vertex buffer (created when uploaded)
    pub(crate) vertex_buffer: Option<wgpu::Buffer>,
    /// GPU index buffer (created when uploaded)
    pub(crate) index_buffer: Option<wgpu::Buffer>,
}

impl Mesh {
    /// Create a mesh from vertices and indices
    pub fn from_data(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices,
            vertex_buffer: None,
            index_buffer: None,
        }
    }

    /// Unit plane on the XZ axes, centered at the origin
    pub fn plane() -> Self {
        let vertices = vec![
            Vertex::new([-0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
            Vertex::new([0.5, 0.0, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.0, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.0, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
        ];

        let indices = vec![0, 1, 2, 2, 3, 0];

        Self::from_data(vertices, indices)
    }

    /// Unit cube centered at the origin
    pub fn cube() -> Self {
        let vertices = vec![
            // Front face
            Vertex::new([-0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
            Vertex::new([0.5, -0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.5, 0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
            // Back face
            Vertex::new([0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
            Vertex::new([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
            Vertex::new([0.5, 0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
            // Top face
            Vertex::new([-0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
            Vertex::new([0.5, 0.5, 0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
            // Bottom face
            Vertex::new([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
            Vertex::new([0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
            Vertex::new([0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
            Vertex::new([-0.5, -0.5, 0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
            // Right face
            Vertex::new([0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
            Vertex::new([0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
            Vertex::new([0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
            Vertex::new([0.5, 0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
            // Left face
            Vertex::new([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
            Vertex::new([-0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
            Vertex::new([-0.5, 0.5, 0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
            Vertex::new([-0.5, 0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
        ];

        let indices = vec![
            0, 1, 2, 2, 3, 0, // Front
            4, 5, 6, 6, 7, 4, // Back
            8, 9, 10, 10, 11, 8, // Top
            12, 13, 14, 14, 15, 12, // Bottom
            16, 17, 18, 18, 19, 16, // Right
            20, 21, 22, 22, 23, 20, // Left
        ];

        Self::from_data(vertices, indices)
    }

    /// UV sphere of unit radius
    pub fn sphere(segments: u32, rings: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for ring in 0..=rings {
            let phi = PI * ring as f32 / rings as f32;
            let y = phi.cos();
            let ring_radius = phi.sin();

            for segment in 0..=segments {
                let theta = 2.0 * PI * segment as f32 / segments as f32;
                let x = ring_radius * theta.cos();
                let z = ring_radius * theta.sin();

                let position = Vec3::new(x, y, z);

                vertices.push(Vertex::new(
                    position.into(),
                    position.normalize_or_zero().into(),
                    [segment as f32 / segments as f32, ring as f32 / rings as f32],
                ));
            }
        }

        for ring in 0..rings {
            for segment in 0..segments {
                let current = ring * (segments + 1) + segment;
                let next = current + segments + 1;

                indices.push(current);
                indices.push(current + 1);
                indices.push(next);

                indices.push(current + 1);
                indices.push(next + 1);
                indices.push(next);
            }
        }

        Self::from_data(vertices, indices)
    }

    /// Capped cylinder of unit radius and unit height, centered at the
    /// origin (y spans -0.5 to 0.5)
    pub fn cylinder(segments: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        // Side wall, normals pointing outward
        for segment in 0..=segments {
            let theta = 2.0 * PI * segment as f32 / segments as f32;
            let (x, z) = (theta.cos(), theta.sin());
            let u = segment as f32 / segments as f32;

            vertices.push(Vertex::new([x, -0.5, z], [x, 0.0, z], [u, 0.0]));
            vertices.push(Vertex::new([x, 0.5, z], [x, 0.0, z], [u, 1.0]));
        }
        for segment in 0..segments {
            let base = segment * 2;
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
        }

        // Caps, fanned from a center vertex
        for (cap_y, normal_y) in [(0.5_f32, 1.0_f32), (-0.5, -1.0)] {
            let center = vertices.len() as u32;
            vertices.push(Vertex::new([0.0, cap_y, 0.0], [0.0, normal_y, 0.0], [0.5, 0.5]));

            for segment in 0..=segments {
                let theta = 2.0 * PI * segment as f32 / segments as f32;
                let (x, z) = (theta.cos(), theta.sin());
                vertices.push(Vertex::new(
                    [x, cap_y, z],
                    [0.0, normal_y, 0.0],
                    [0.5 + 0.5 * x, 0.5 - 0.5 * z],
                ));
            }
            for segment in 0..segments {
                let ring = center + 1 + segment;
                if normal_y > 0.0 {
                    indices.extend_from_slice(&[center, ring + 1, ring]);
                } else {
                    indices.extend_from_slice(&[center, ring, ring + 1]);
                }
            }
        }

        Self::from_data(vertices, indices)
    }

    /// Torus of unit major radius in the XZ plane
    pub fn torus(tube_radius: f32, segments: u32, sides: u32) -> Self {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();

        for segment in 0..=segments {
            let phi = 2.0 * PI * segment as f32 / segments as f32;
            let (cos_phi, sin_phi) = (phi.cos(), phi.sin());

            for side in 0..=sides {
                let theta = 2.0 * PI * side as f32 / sides as f32;
                let (cos_theta, sin_theta) = (theta.cos(), theta.sin());

                let position = [
                    (1.0 + tube_radius * cos_theta) * cos_phi,
                    tube_radius * sin_theta,
                    (1.0 + tube_radius * cos_theta) * sin_phi,
                ];
                let normal = [cos_theta * cos_phi, sin_theta, cos_theta * sin_phi];

                vertices.push(Vertex::new(
                    position,
                    normal,
                    [
                        segment as f32 / segments as f32,
                        side as f32 / sides as f32,
                    ],
                ));
            }
        }

        for segment in 0..segments {
            for side in 0..sides {
                let current = segment * (sides + 1) + side;
                let next = current + sides + 1;

                indices.extend_from_slice(&[current, current + 1, next]);
                indices.extend_from_slice(&[current + 1, next + 1, next]);
            }
        }

        Self::from_data(vertices, indices)
    }

    /// Get the number of indices
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Check if the mesh has been uploaded to GPU
    pub fn is_uploaded(&self) -> bool {
        self.vertex_buffer.is_some() && self.index_buffer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_mesh(mesh: &Mesh) {
        assert!(!mesh.vertices.is_empty());
        assert_eq!(mesh.indices.len() % 3, 0);
        let max = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    fn check_unit_normals(mesh: &Mesh) {
        for vertex in &mesh.vertices {
            let length = Vec3::from(vertex.normal).length();
            assert!((length - 1.0).abs() < 1e-4, "normal length {length}");
        }
    }

    #[test]
    fn test_plane() {
        let plane = Mesh::plane();
        check_mesh(&plane);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.index_count(), 6);
    }

    #[test]
    fn test_cube() {
        let cube = Mesh::cube();
        check_mesh(&cube);
        check_unit_normals(&cube);
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.index_count(), 36);
    }

    #[test]
    fn test_sphere_radius() {
        let sphere = Mesh::sphere(16, 8);
        check_mesh(&sphere);

        for vertex in &sphere.vertices {
            let radius = Vec3::from(vertex.position).length();
            assert!((radius - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cylinder_extents() {
        let cylinder = Mesh::cylinder(24);
        check_mesh(&cylinder);
        check_unit_normals(&cylinder);

        let min_y = cylinder
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MAX, f32::min);
        let max_y = cylinder
            .vertices
            .iter()
            .map(|v| v.position[1])
            .fold(f32::MIN, f32::max);

        // Unit height centered at the origin: builders scale then offset
        assert!((min_y + 0.5).abs() < 1e-5);
        assert!((max_y - 0.5).abs() < 1e-5);

        for vertex in &cylinder.vertices {
            let radial =
                (vertex.position[0].powi(2) + vertex.position[2].powi(2)).sqrt();
            assert!(radial <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn test_torus_tube() {
        let torus = Mesh::torus(0.25, 24, 12);
        check_mesh(&torus);
        check_unit_normals(&torus);

        // Every vertex sits tube_radius from the unit ring
        for vertex in &torus.vertices {
            let position = Vec3::from(vertex.position);
            let ring_distance =
                (position.x.powi(2) + position.z.powi(2)).sqrt() - 1.0;
            let tube = (ring_distance.powi(2) + position.y.powi(2)).sqrt();
            assert!((tube - 0.25).abs() < 1e-4);
        }
    }
}
