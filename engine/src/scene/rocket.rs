//! Procedural rocket mesh.
//!
//! Cylindrical body, conical nose, base cap, and four fins, built in model
//! units roughly 100x the world scale; the viewer scales the model matrix
//! down by 0.01.

use glam::Vec3;

use crate::scene::mesh::{face_normal, Mesh};

const BODY_RADIUS: f32 = 30.0;
const BODY_BOTTOM: f32 = -100.0;
const BODY_TOP: f32 = 60.0;
const NOSE_TIP: f32 = 140.0;

const FIN_TOP: f32 = -30.0;
const FIN_OUTER_RADIUS: f32 = 65.0;
const FIN_OUTER_TOP: f32 = -70.0;

const BODY_COLOR: [f32; 4] = [0.85, 0.85, 0.88, 1.0];
const TRIM_COLOR: [f32; 4] = [0.8, 0.12, 0.1, 1.0];

/// Build the rocket. `segments` controls the radial tessellation of the
/// body and nose; 24 reads smooth at viewing distance.
pub fn rocket_mesh(segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut mesh = Mesh::new();

    let ring = |angle: f32, radius: f32, y: f32| {
        Vec3::new(radius * angle.cos(), y, radius * angle.sin())
    };

    for i in 0..segments {
        let a0 = std::f32::consts::TAU * i as f32 / segments as f32;
        let a1 = std::f32::consts::TAU * (i + 1) as f32 / segments as f32;

        let bottom0 = ring(a0, BODY_RADIUS, BODY_BOTTOM);
        let bottom1 = ring(a1, BODY_RADIUS, BODY_BOTTOM);
        let top0 = ring(a0, BODY_RADIUS, BODY_TOP);
        let top1 = ring(a1, BODY_RADIUS, BODY_TOP);

        // Body wall, flat-shaded per segment
        let wall_normal = face_normal(bottom0, top0, top1);
        mesh.add_quad(top0, top1, bottom1, bottom0, wall_normal, BODY_COLOR);

        // Nose cone
        let tip = Vec3::new(0.0, NOSE_TIP, 0.0);
        let nose_normal = face_normal(top0, tip, top1);
        mesh.add_triangle(top0, tip, top1, nose_normal, TRIM_COLOR);

        // Base cap, facing down
        let center = Vec3::new(0.0, BODY_BOTTOM, 0.0);
        mesh.add_triangle(center, bottom0, bottom1, Vec3::NEG_Y, TRIM_COLOR);
    }

    for i in 0..4 {
        let angle = std::f32::consts::FRAC_PI_2 * i as f32;
        mesh.merge(fin(angle));
    }

    mesh
}

/// One trapezoidal fin in the vertical plane at `angle` around the body.
fn fin(angle: f32) -> Mesh {
    let dir = Vec3::new(angle.cos(), 0.0, angle.sin());
    let normal = Vec3::new(-angle.sin(), 0.0, angle.cos());

    let inner_bottom = dir * BODY_RADIUS + Vec3::Y * BODY_BOTTOM;
    let inner_top = dir * BODY_RADIUS + Vec3::Y * FIN_TOP;
    let outer_top = dir * FIN_OUTER_RADIUS + Vec3::Y * FIN_OUTER_TOP;
    let outer_bottom = dir * FIN_OUTER_RADIUS + Vec3::Y * BODY_BOTTOM;

    let mut mesh = Mesh::new();
    mesh.add_quad(
        inner_top,
        outer_top,
        outer_bottom,
        inner_bottom,
        normal,
        TRIM_COLOR,
    );
    mesh
}
