//! Head Tracking Module
//!
//! The viewer consumes head orientation through [`HeadPoseSource`], the
//! seam where a real headset SDK would plug in. On a desktop the
//! [`SimulatedHeadTracker`] stands in, producing a slow deterministic
//! drift of pitch, yaw, and roll so the motion mapper gets exercised
//! without hardware.

use std::time::Instant;

/// Sensor quaternion in (x, y, z, w) order.
pub type HeadQuaternion = [f32; 4];

/// A source of per-frame head-orientation readings.
///
/// `poll` is called once per frame on the render thread; `None` means no
/// reading is available this frame. A reading may still be the zero
/// quaternion, which consumers treat as invalid.
pub trait HeadPoseSource {
    fn poll(&mut self) -> Option<HeadQuaternion>;

    /// Re-zero the tracker, as when the trigger is pulled.
    fn reset(&mut self);
}

/// Deterministic stand-in for a headset's sensor fusion.
///
/// Emits the zero quaternion for its first sample after construction or
/// reset (mirroring a tracker that has not converged yet), then smooth
/// incommensurate oscillations on all three axes. Amplitudes reach the
/// high speed tier of the motion mapper without ever leaving the unit
/// ball.
pub struct SimulatedHeadTracker {
    started: Instant,
    primed: bool,
}

impl SimulatedHeadTracker {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            primed: false,
        }
    }

    /// The orientation at `t` seconds after reset. Pure function of time.
    pub fn sample_at(t: f32) -> HeadQuaternion {
        let pitch = 0.35 * (0.31 * t).sin();
        let yaw = 0.35 * (0.17 * t + 1.3).sin();
        let roll = 0.30 * (0.11 * t + 2.1).sin();
        let w = (1.0 - (pitch * pitch + yaw * yaw + roll * roll))
            .max(0.0)
            .sqrt();
        [pitch, yaw, roll, w]
    }
}

impl Default for SimulatedHeadTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadPoseSource for SimulatedHeadTracker {
    fn poll(&mut self) -> Option<HeadQuaternion> {
        if !self.primed {
            self.primed = true;
            return Some([0.0; 4]);
        }
        Some(Self::sample_at(self.started.elapsed().as_secs_f32()))
    }

    fn reset(&mut self) {
        self.started = Instant::now();
        self.primed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_after_reset_is_zero_quaternion() {
        let mut tracker = SimulatedHeadTracker::new();
        assert_eq!(tracker.poll(), Some([0.0; 4]));
        assert_ne!(tracker.poll(), Some([0.0; 4]));

        tracker.reset();
        assert_eq!(tracker.poll(), Some([0.0; 4]));
    }

    #[test]
    fn samples_are_deterministic_and_unit_length() {
        for t in [0.0_f32, 1.5, 10.0, 123.4] {
            let a = SimulatedHeadTracker::sample_at(t);
            let b = SimulatedHeadTracker::sample_at(t);
            assert_eq!(a, b);

            let norm_sq: f32 = a.iter().map(|c| c * c).sum();
            assert!((norm_sq - 1.0).abs() < 1e-5, "norm² was {norm_sq} at t={t}");
        }
    }

    #[test]
    fn samples_stay_inside_tier_range() {
        // Components never exceed 0.35, so buckets stay within ±3.
        let mut t = 0.0_f32;
        while t < 120.0 {
            let q = SimulatedHeadTracker::sample_at(t);
            for c in &q[..3] {
                assert!(c.abs() <= 0.35 + 1e-6);
            }
            t += 0.37;
        }
    }
}
