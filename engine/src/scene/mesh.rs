//! Mesh building blocks shared by the scene generators.

use glam::Vec3;

use crate::render::gpu_context::GpuContext;

/// One vertex: position, normal, RGBA color. 40 bytes, tightly packed for
/// the vertex buffer layout in the render pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 40]);

/// CPU-side mesh under construction.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append another mesh, rebasing its indices.
    pub fn merge(&mut self, other: Mesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// One triangle with a shared normal.
    pub fn add_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, normal: Vec3, color: [f32; 4]) {
        let base = self.vertices.len() as u32;
        for p in [a, b, c] {
            self.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        self.indices.extend([base, base + 1, base + 2]);
    }

    /// One quad (two triangles) from corners given counter-clockwise.
    pub fn add_quad(
        &mut self,
        tl: Vec3,
        tr: Vec3,
        br: Vec3,
        bl: Vec3,
        normal: Vec3,
        color: [f32; 4],
    ) {
        let base = self.vertices.len() as u32;
        for p in [tl, tr, br, bl] {
            self.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: normal.to_array(),
                color,
            });
        }
        self.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned bounds of all vertex positions, or None when empty.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut verts = self.vertices.iter().map(|v| Vec3::from_array(v.position));
        let first = verts.next()?;
        let (mut min, mut max) = (first, first);
        for p in verts {
            min = min.min(p);
            max = max.max(p);
        }
        Some((min, max))
    }

    /// Upload to GPU vertex and index buffers.
    pub fn upload(&self, gpu: &GpuContext, label: &str) -> MeshBuffer {
        MeshBuffer {
            vertex_buffer: gpu
                .create_vertex_buffer(&format!("{label} Vertices"), &self.vertices),
            index_buffer: gpu.create_index_buffer(&format!("{label} Indices"), &self.indices),
            index_count: self.indices.len() as u32,
        }
    }
}

/// Uploaded mesh, ready to draw.
pub struct MeshBuffer {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffer {
    /// Bind and draw into an active pass. Bind groups must be set already.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Face normal of a counter-clockwise triangle.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_emits_four_vertices_six_indices() {
        let mut mesh = Mesh::new();
        mesh.add_quad(
            Vec3::new(-1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::Z,
            [1.0; 4],
        );
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn merge_rebases_indices() {
        let mut a = Mesh::new();
        a.add_triangle(Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, [1.0; 4]);
        let mut b = Mesh::new();
        b.add_triangle(Vec3::ZERO, Vec3::Y, Vec3::Z, Vec3::X, [1.0; 4]);
        a.merge(b);
        assert_eq!(a.vertices.len(), 6);
        assert_eq!(a.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn face_normal_is_unit_and_right_handed() {
        // x cross z = -y in right-handed coordinates
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::Z);
        assert!((n - Vec3::NEG_Y).length() < 1e-6);
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(
            Vec3::new(-2.0, 0.0, 1.0),
            Vec3::new(3.0, -1.0, 0.0),
            Vec3::new(0.0, 5.0, -4.0),
            Vec3::Z,
            [1.0; 4],
        );
        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vec3::new(-2.0, -1.0, -4.0));
        assert_eq!(max, Vec3::new(3.0, 5.0, 1.0));
    }
}
