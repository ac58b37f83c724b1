//! Ground reference grid.
//!
//! A flat line grid slightly below the rocket gives the eye a depth anchor
//! in stereo; it is drawn with the line pipeline.

use glam::Vec3;

use crate::scene::mesh::{Mesh, MeshVertex};

/// Half-extent of the grid in world units; lines run from -EXTENT to
/// +EXTENT on both axes.
pub const GRID_EXTENT: i32 = 20;
/// Height of the grid plane.
pub const GRID_Y: f32 = -1.0;

const GRID_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Build the grid as a line-list mesh: one full-length line per integer
/// coordinate along each axis, sequential indices.
pub fn grid_mesh() -> Mesh {
    let mut mesh = Mesh::new();
    let extent = GRID_EXTENT as f32;

    let mut push_line = |a: Vec3, b: Vec3| {
        let base = mesh.vertices.len() as u32;
        for p in [a, b] {
            mesh.vertices.push(MeshVertex {
                position: p.to_array(),
                normal: [0.0, 1.0, 0.0],
                color: GRID_COLOR,
            });
        }
        mesh.indices.extend([base, base + 1]);
    };

    for i in -GRID_EXTENT..=GRID_EXTENT {
        let t = i as f32;
        // Parallel to X
        push_line(Vec3::new(-extent, GRID_Y, t), Vec3::new(extent, GRID_Y, t));
        // Parallel to Z
        push_line(Vec3::new(t, GRID_Y, -extent), Vec3::new(t, GRID_Y, extent));
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_two_vertices_per_line() {
        let mesh = grid_mesh();
        let lines = 2 * (2 * GRID_EXTENT + 1) as usize;
        assert_eq!(mesh.vertices.len(), lines * 2);
        assert_eq!(mesh.indices.len(), lines * 2);
    }

    #[test]
    fn grid_lies_in_its_plane_within_extent() {
        let mesh = grid_mesh();
        let extent = GRID_EXTENT as f32;
        for v in &mesh.vertices {
            assert_eq!(v.position[1], GRID_Y);
            assert!(v.position[0].abs() <= extent);
            assert!(v.position[2].abs() <= extent);
        }
    }

    #[test]
    fn grid_indices_are_sequential() {
        let mesh = grid_mesh();
        for (i, index) in mesh.indices.iter().enumerate() {
            assert_eq!(*index as usize, i);
        }
    }
}
