//! Integration tests for the head motion mapper: speed tiers, bound
//! behavior over long runs, and reset.

use glam::Vec3;
use rocket_vr_engine::camera::head_motion::{
    CAMERA_START, X_BOUND, Z_BOUND_IN, Z_BOUND_OUT,
};
use rocket_vr_engine::camera::{HeadMotion, HeadMotionConfig};

/// Unit quaternion with the given x/y/z components (w fills the rest).
fn quat(x: f32, y: f32, z: f32) -> [f32; 4] {
    let w = (1.0 - x * x - y * y - z * z).max(0.0).sqrt();
    [x, y, z, w]
}

#[test]
fn default_configuration() {
    let motion = HeadMotion::default();
    assert_eq!(motion.position, Vec3::new(0.0, 0.0, 10.0));
    let cfg = HeadMotionConfig::default();
    assert_eq!(cfg.low_speed, 0.01);
    assert_eq!(cfg.medium_speed, 0.02);
    assert_eq!(cfg.high_speed, 0.04);
}

#[test]
fn zero_quaternion_is_rejected() {
    let mut motion = HeadMotion::default();
    assert!(!motion.apply_quaternion([0.0; 4]));
    assert_eq!(motion.position, CAMERA_START);
}

#[test]
fn same_reading_moves_the_same_amount() {
    let reading = quat(0.22, -0.14, 0.07);
    let mut a = HeadMotion::default();
    let mut b = HeadMotion::default();
    for _ in 0..10 {
        a.apply_quaternion(reading);
        b.apply_quaternion(reading);
    }
    assert_eq!(a.position, b.position);
}

#[test]
fn pitch_drives_y_against_the_tilt() {
    // Pitch component -0.35 buckets to -3, high tier, positive Y speed.
    let mut motion = HeadMotion::default();
    motion.apply_quaternion(quat(-0.35, 0.0, 0.0));
    assert!((motion.position.y - 0.04).abs() < 1e-6);
    assert_eq!(motion.position.x, 0.0);
    assert_eq!(motion.position.z, 10.0);
}

#[test]
fn yaw_drives_x_in_medium_tier() {
    // Yaw component 0.25 buckets to 2, medium tier, negative X speed.
    let mut motion = HeadMotion::default();
    motion.apply_quaternion(quat(0.0, 0.25, 0.0));
    assert!((motion.position.x + 0.02).abs() < 1e-6);
    assert_eq!(motion.position.y, 0.0);
}

#[test]
fn roll_bucket_two_zooms_in_at_medium_speed() {
    // Roll component 0.25 buckets to +2, so Z decreases by the medium
    // speed (zoom toward the scene).
    let mut motion = HeadMotion::default();
    motion.apply_quaternion(quat(0.0, 0.0, 0.25));
    assert!((motion.position.z - 9.98).abs() < 1e-6);
}

#[test]
fn roll_drives_z_in_low_tier() {
    // Roll component 0.15 buckets to 1, low tier, negative Z speed.
    let mut motion = HeadMotion::default();
    motion.apply_quaternion(quat(0.0, 0.0, 0.15));
    assert!((motion.position.z - 9.99).abs() < 1e-6);
}

#[test]
fn small_tilts_sit_in_the_dead_zone() {
    let mut motion = HeadMotion::default();
    motion.apply_quaternion(quat(0.05, -0.05, 0.05));
    assert_eq!(motion.position, CAMERA_START);
}

#[test]
fn unnormalized_readings_are_normalized_first() {
    // [3, 0, 0, 4] has length 5; the pitch component normalizes to 0.6,
    // bucket 6, high tier.
    let mut motion = HeadMotion::default();
    motion.apply_quaternion([3.0, 0.0, 0.0, 4.0]);
    assert!((motion.position.y + 0.04).abs() < 1e-6);
}

#[test]
fn x_is_trapped_just_past_its_bound() {
    // Yaw -0.35 pushes X outward at the high tier; once X steps past the
    // bound, further outward steps are rejected.
    let mut motion = HeadMotion::default();
    let reading = quat(0.0, -0.35, 0.0);
    for _ in 0..500 {
        motion.apply_quaternion(reading);
    }
    assert!(motion.position.x > X_BOUND - 1e-4);
    assert!(motion.position.x <= X_BOUND + 0.04 + 1e-4);
}

#[test]
fn z_never_zooms_past_the_near_limit() {
    let mut motion = HeadMotion::default();
    let zoom_in = quat(0.0, 0.0, 0.35);
    for _ in 0..500 {
        motion.apply_quaternion(zoom_in);
    }
    assert!(motion.position.z >= Z_BOUND_IN - 0.04 - 1e-4);
    assert!(motion.position.z < Z_BOUND_IN + 1e-4);
}

#[test]
fn z_never_zooms_past_the_far_limit() {
    let mut motion = HeadMotion::default();
    let zoom_out = quat(0.0, 0.0, -0.35);
    for _ in 0..1500 {
        motion.apply_quaternion(zoom_out);
    }
    assert!(motion.position.z <= Z_BOUND_OUT + 0.04 + 1e-4);
    assert!(motion.position.z > Z_BOUND_OUT - 1e-4);
}

#[test]
fn reset_restores_the_exact_start_position() {
    let mut motion = HeadMotion::default();
    for _ in 0..37 {
        motion.apply_quaternion(quat(0.21, -0.33, 0.12));
    }
    assert_ne!(motion.position, CAMERA_START);
    motion.reset();
    assert_eq!(motion.position, CAMERA_START);
}
