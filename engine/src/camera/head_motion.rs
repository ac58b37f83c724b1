//! Head Motion Mapper
//!
//! Converts a per-frame head-orientation quaternion into an incremental,
//! bounded camera translation. This is a rate-limited integrator with a
//! dead zone: the normalized quaternion's first three components are
//! discretized into integer buckets, each bucket maps to one of three speed
//! tiers, and the signed speed is integrated into one camera axis.
//!
//! Axis wiring (deliberate, matches natural head-tilt-to-pan direction):
//! - yaw bucket (component 1) drives camera X
//! - pitch bucket (component 0) drives camera Y
//! - roll bucket (component 2) drives camera Z (zoom in/out)
//!
//! A positive bucket always produces a negative speed and vice versa. Do
//! not "fix" the sign convention; tilting the head right pans the scene
//! left on purpose.

use glam::Vec3;

/// Camera start position, restored exactly by [`HeadMotion::reset`].
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);

/// Symmetric X range: camera X stays in [-X_BOUND, X_BOUND].
pub const X_BOUND: f32 = 9.0;
/// Symmetric Y range: camera Y stays in [-Y_BOUND, Y_BOUND].
pub const Y_BOUND: f32 = 10.0;
/// Near Z limit (closest zoom).
pub const Z_BOUND_IN: f32 = 4.0;
/// Far Z limit (widest zoom).
pub const Z_BOUND_OUT: f32 = 36.0;

/// Bucket scale: normalized quaternion components are multiplied by this
/// and truncated toward zero, giving buckets in [-10, 10].
const BUCKET_SCALE: f32 = 10.0;

/// Per-tier speeds in world units per head-pose update.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeadMotionConfig {
    /// Speed for |bucket| == 1
    pub low_speed: f32,
    /// Speed for |bucket| == 2
    pub medium_speed: f32,
    /// Speed for |bucket| >= 3
    pub high_speed: f32,
}

impl Default for HeadMotionConfig {
    fn default() -> Self {
        Self {
            low_speed: 0.01,
            medium_speed: 0.02,
            high_speed: 0.04,
        }
    }
}

/// Camera position driven by head orientation.
///
/// Owns the only mutable camera state in the system. Both the head-pose
/// update and the draw run on the event-loop thread, so no locking is
/// needed; whoever holds the `&mut` owns the state.
#[derive(Clone, Copy, Debug)]
pub struct HeadMotion {
    /// Current camera position in world space.
    pub position: Vec3,
    /// Speed tier configuration.
    pub config: HeadMotionConfig,
}

impl Default for HeadMotion {
    fn default() -> Self {
        Self {
            position: CAMERA_START,
            config: HeadMotionConfig::default(),
        }
    }
}

impl HeadMotion {
    pub fn new(config: HeadMotionConfig) -> Self {
        Self {
            position: CAMERA_START,
            config,
        }
    }

    /// Apply one head-orientation reading.
    ///
    /// `quat` is the sensor quaternion in (x, y, z, w) order; it does not
    /// need to be normalized. A zero-length quaternion is an invalid
    /// reading and leaves the position untouched.
    ///
    /// Returns `false` if the reading was rejected.
    pub fn apply_quaternion(&mut self, quat: [f32; 4]) -> bool {
        let length =
            (quat[0] * quat[0] + quat[1] * quat[1] + quat[2] * quat[2] + quat[3] * quat[3]).sqrt();
        if length == 0.0 {
            println!("[HeadMotion] zero-length quaternion, skipping update");
            return false;
        }

        let pitch = bucket(quat[0] / length); // head up/down
        let yaw = bucket(quat[1] / length); // head left/right
        let roll = bucket(quat[2] / length); // head tilt

        let pitch_speed = bucket_speed(pitch, &self.config);
        let yaw_speed = bucket_speed(yaw, &self.config);
        let roll_speed = bucket_speed(roll, &self.config);

        step_bounded(&mut self.position.x, yaw_speed, -X_BOUND, X_BOUND);
        step_bounded(&mut self.position.y, pitch_speed, -Y_BOUND, Y_BOUND);
        step_bounded(&mut self.position.z, roll_speed, Z_BOUND_IN, Z_BOUND_OUT);

        true
    }

    /// Restore the camera to its exact start position.
    pub fn reset(&mut self) {
        self.position = CAMERA_START;
    }
}

/// Discretize a normalized quaternion component into an integer bucket.
///
/// Truncation is toward zero, so the dead zone covers (-0.1, 0.1).
fn bucket(component: f32) -> i32 {
    (component * BUCKET_SCALE) as i32
}

/// Map a bucket to its signed speed.
///
/// Positive buckets drive negative motion; the pan direction opposes the
/// tilt direction by design.
fn bucket_speed(bucket: i32, config: &HeadMotionConfig) -> f32 {
    let tier = match bucket.abs() {
        0 => 0.0,
        1 => config.low_speed,
        2 => config.medium_speed,
        _ => config.high_speed,
    };
    -(bucket.signum() as f32) * tier
}

/// Integrate `speed` into `coord` under the bound rule.
///
/// Inside the closed range any step is accepted (the coordinate may land
/// slightly past a bound; it is never clamped back). Outside the range,
/// only steps pointing back toward the interior are accepted.
fn step_bounded(coord: &mut f32, speed: f32, min: f32, max: f32) {
    let inside = *coord >= min && *coord <= max;
    let returning = (*coord > max && speed < 0.0) || (*coord < min && speed > 0.0);
    if inside || returning {
        *coord += speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_truncates_toward_zero() {
        assert_eq!(bucket(0.35), 3);
        assert_eq!(bucket(-0.35), -3);
        assert_eq!(bucket(0.09), 0);
        assert_eq!(bucket(-0.09), 0);
        assert_eq!(bucket(1.0), 10);
    }

    #[test]
    fn bucket_speed_tiers() {
        let cfg = HeadMotionConfig::default();
        assert_eq!(bucket_speed(0, &cfg), 0.0);
        assert_eq!(bucket_speed(1, &cfg), -cfg.low_speed);
        assert_eq!(bucket_speed(-1, &cfg), cfg.low_speed);
        assert_eq!(bucket_speed(2, &cfg), -cfg.medium_speed);
        assert_eq!(bucket_speed(-2, &cfg), cfg.medium_speed);
        assert_eq!(bucket_speed(3, &cfg), -cfg.high_speed);
        assert_eq!(bucket_speed(-7, &cfg), cfg.high_speed);
        assert_eq!(bucket_speed(10, &cfg), -cfg.high_speed);
    }

    #[test]
    fn step_bounded_inside_accepts_any_direction() {
        let mut x = 0.0;
        step_bounded(&mut x, 0.04, -9.0, 9.0);
        assert_eq!(x, 0.04);
        step_bounded(&mut x, -0.08, -9.0, 9.0);
        assert_eq!(x, -0.04);
    }

    #[test]
    fn step_bounded_outside_only_returns() {
        let mut x = 9.5;
        step_bounded(&mut x, 0.04, -9.0, 9.0);
        assert_eq!(x, 9.5, "outward step past max must be rejected");
        step_bounded(&mut x, -0.04, -9.0, 9.0);
        assert_eq!(x, 9.46, "inward step must be accepted");

        let mut z = 3.0;
        step_bounded(&mut z, -0.02, 4.0, 36.0);
        assert_eq!(z, 3.0);
        step_bounded(&mut z, 0.02, 4.0, 36.0);
        assert_eq!(z, 3.02);
    }

    #[test]
    fn step_bounded_exactly_on_bound_counts_as_inside() {
        let mut x = 9.0;
        step_bounded(&mut x, 0.04, -9.0, 9.0);
        // On the bound the step is still accepted; next update it is
        // outside and trapped.
        assert_eq!(x, 9.04);
        step_bounded(&mut x, 0.04, -9.0, 9.0);
        assert_eq!(x, 9.04);
    }
}
