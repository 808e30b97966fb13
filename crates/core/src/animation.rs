//! Animate transitions of some state over time.
use crate::time::{Duration, Instant};

pub use lilt::{Easing, Interpolable};

/// The animation of some particular state.
///
/// An [`Animation`] is a passive timing source: it never runs by itself.
/// Callers transition it with [`go`](Self::go_mut) and then sample it with
/// [`interpolate`](Animation::interpolate) once per render frame until
/// [`is_animating`](Self::is_animating) turns false.
#[derive(Debug, Clone)]
pub struct Animation<T>
where
    T: Clone + Copy + PartialEq + lilt::FloatRepresentable,
{
    raw: lilt::Animated<T, Instant>,
}

impl<T> Animation<T>
where
    T: Clone + Copy + PartialEq + lilt::FloatRepresentable,
{
    /// Creates a new [`Animation`] with the given initial state.
    pub fn new(state: T) -> Self {
        Self {
            raw: lilt::Animated::new(state),
        }
    }

    /// Makes the [`Animation`] very quick (100 ms).
    pub fn very_quick(self) -> Self {
        self.duration(Duration::from_millis(100))
    }

    /// Makes the [`Animation`] quick (200 ms).
    pub fn quick(self) -> Self {
        self.duration(Duration::from_millis(200))
    }

    /// Makes the [`Animation`] slow (400 ms).
    pub fn slow(self) -> Self {
        self.duration(Duration::from_millis(400))
    }

    /// Sets the duration of the [`Animation`].
    pub fn duration(mut self, duration: Duration) -> Self {
        self.raw = self.raw.duration(duration.as_secs_f32() * 1_000.0);
        self
    }

    /// Sets the [`Easing`] function of the [`Animation`].
    pub fn easing(mut self, easing: Easing) -> Self {
        self.raw = self.raw.easing(easing);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time.
    pub fn go(mut self, new_state: T, at: Instant) -> Self {
        self.go_mut(new_state, at);
        self
    }

    /// Transitions the [`Animation`] to a new state at the given time, by
    /// reference.
    pub fn go_mut(&mut self, new_state: T, at: Instant) {
        self.raw.transition(new_state, at);
    }

    /// Whether the [`Animation`] is still in progress at the given time.
    pub fn is_animating(&self, at: Instant) -> bool {
        self.raw.in_progress(at)
    }

    /// The target state of the [`Animation`].
    pub fn value(&self) -> T {
        self.raw.value
    }
}

impl Animation<bool> {
    /// Samples the [`Animation`] at the given time, interpolating between
    /// `start` for the `false` state and `end` for the `true` state.
    pub fn interpolate<I>(&self, start: I, end: I, at: Instant) -> I
    where
        I: Interpolable + Clone,
    {
        self.raw.animate_bool(start, end, at)
    }
}
