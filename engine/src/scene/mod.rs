//! Scene content: procedurally generated meshes for the rocket, the
//! ground grid, and the text label.

pub mod grid;
pub mod label;
pub mod mesh;
pub mod rocket;

pub use grid::{grid_mesh, GRID_EXTENT, GRID_Y};
pub use label::label_mesh;
pub use mesh::{face_normal, Mesh, MeshBuffer, MeshVertex};
pub use rocket::rocket_mesh;
