//! Post-release inertia and animated settling.
use flick_core::time::Instant;
use flick_core::{Animation, Easing, Vector};

/// Fraction of the release velocity applied as a one-shot displacement.
pub(crate) const IMPULSE_FACTOR: f32 = 0.3;

/// The one-shot displacement for a release at the given velocity.
pub(crate) fn impulse(velocity: Vector) -> Vector {
    velocity * IMPULSE_FACTOR
}

/// Guards an axis against extrapolating past its starting edge.
///
/// A post-impulse offset beyond the starting edge while the velocity
/// still points into the content means the direction state is corrupted;
/// the axis resets to the starting edge instead of oscillating.
pub(crate) fn check_reversal(offset: f32, velocity: f32) -> f32 {
    if offset > 0.0 && velocity < 0.0 {
        0.0
    } else {
        offset
    }
}

/// An in-flight transition of the committed offset.
///
/// Mirrors a platform "animate with completion" block: the transition is
/// sampled per frame and its completion is observed by whoever still holds
/// the [`Settle`]. Dropping it cancels the completion, so a superseded
/// transition can never fire late.
#[derive(Debug, Clone)]
pub(crate) struct Settle {
    from: Vector,
    to: Vector,
    animation: Animation<bool>,
}

impl Settle {
    /// Starts a transition from the currently displayed offset to `to`.
    pub fn new(from: Vector, to: Vector, now: Instant) -> Self {
        Self {
            from,
            to,
            animation: Animation::new(false)
                .quick()
                .easing(Easing::EaseOutBack)
                .go(true, now),
        }
    }

    /// The transition target.
    pub fn target(&self) -> Vector {
        self.to
    }

    /// The displayed offset at the given time.
    pub fn value(&self, now: Instant) -> Vector {
        let progress = self.animation.interpolate(0.0, 1.0, now);

        self.from + (self.to - self.from) * progress
    }

    /// Whether the transition is still running at the given time.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_animating(now)
    }
}
