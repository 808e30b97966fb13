//! Estimate drag velocity from successive translation deltas.
use flick_core::{Axes, Axis, Vector};

/// Hard cap on the smoothed velocity, per axis, in units per second.
pub(crate) const MAX_VELOCITY: f32 = 2_000.0;

/// Hard cap on a single velocity correction, per axis.
const MAX_VELOCITY_DELTA: f32 = 1_000.0;

/// Weight of the newest sample in the exponential blend. Lower = smoother.
const SMOOTHING: f32 = 0.3;

/// An exponentially-smoothed estimate of drag velocity, in units per
/// second.
///
/// Raw per-event speeds are jittery; the estimator blends each new sample
/// into the running value and bounds both the per-sample correction and
/// the result, so a single outlier event can never fling the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityEstimator {
    velocity: Vector,
}

impl VelocityEstimator {
    /// Creates an estimator at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current velocity estimate.
    pub fn value(self) -> Vector {
        self.velocity
    }

    /// Feeds a translation delta observed over `dt` seconds.
    ///
    /// Updates with `dt <= 0` are skipped entirely. Components on disabled
    /// axes are forced to zero on every update.
    pub fn update(&mut self, delta: Vector, dt: f32, axes: Axes, speed_factor: f32) {
        if dt <= 0.0 {
            return;
        }

        for axis in Axis::ALL {
            let component = axis.of_mut(&mut self.velocity);

            if !axes.contains_axis(axis) {
                *component = 0.0;
                continue;
            }

            let raw = axis.of(delta) / dt * speed_factor;
            let correction =
                (raw - *component).clamp(-MAX_VELOCITY_DELTA, MAX_VELOCITY_DELTA);

            *component = (*component * (1.0 - SMOOTHING) + correction * SMOOTHING)
                .clamp(-MAX_VELOCITY, MAX_VELOCITY);
        }
    }

    /// Zeroes the components on every disabled axis.
    pub fn align(&mut self, axes: Axes) {
        self.velocity = axes.mask(self.velocity);
    }

    /// Resets the estimate to rest.
    pub fn clear(&mut self) {
        self.velocity = Vector::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sample_smoothing() {
        let mut estimator = VelocityEstimator::new();

        // 50 units in 100ms, amplified by 1.2: raw speed of -600, blended
        // at 0.3 into a resting estimate.
        estimator.update(Vector::new(-50.0, 0.0), 0.1, Axes::ALL, 1.2);

        assert!((estimator.value().x - -180.0).abs() < 1e-3);
        assert_eq!(estimator.value().y, 0.0);
    }

    #[test]
    fn test_velocity_never_exceeds_cap() {
        let mut estimator = VelocityEstimator::new();

        for _ in 0..100 {
            estimator.update(Vector::new(1_000_000.0, -1_000_000.0), 0.001, Axes::ALL, 1.2);

            let velocity = estimator.value();
            assert!(velocity.x.abs() <= MAX_VELOCITY);
            assert!(velocity.y.abs() <= MAX_VELOCITY);
        }
    }

    #[test]
    fn test_disabled_axis_is_forced_to_zero() {
        let mut estimator = VelocityEstimator::new();

        estimator.update(Vector::new(10.0, 10.0), 0.016, Axes::ALL, 1.2);
        assert!(estimator.value().y != 0.0);

        estimator.update(Vector::new(10.0, 10.0), 0.016, Axes::HORIZONTAL, 1.2);
        assert_eq!(estimator.value().y, 0.0);
        assert!(estimator.value().x != 0.0);
    }

    #[test]
    fn test_non_positive_dt_is_skipped() {
        let mut estimator = VelocityEstimator::new();

        estimator.update(Vector::new(100.0, 100.0), 0.0, Axes::ALL, 1.2);
        assert_eq!(estimator.value(), Vector::ZERO);

        estimator.update(Vector::new(100.0, 100.0), -0.1, Axes::ALL, 1.2);
        assert_eq!(estimator.value(), Vector::ZERO);
    }

    #[test]
    fn test_correction_is_bounded() {
        let mut estimator = VelocityEstimator::new();

        // A raw speed far beyond the correction cap only moves the
        // estimate by the capped amount, blended at 0.3.
        estimator.update(Vector::new(100.0, 0.0), 0.001, Axes::HORIZONTAL, 1.2);

        assert!((estimator.value().x - 300.0).abs() < 1e-3);
    }
}
