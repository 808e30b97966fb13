//! The scroll physics engine.
use crate::bounds;
use crate::inertia::{self, Settle};
use crate::settings::Settings;
use crate::velocity::VelocityEstimator;

use flick_core::time::{Duration, Instant};
use flick_core::{Axes, Axis, Size, Vector};

/// Delays after appearance at which the measurement fallback runs.
///
/// Layout providers often report late; the first check catches the common
/// one-frame delay, the second catches slow asynchronous measurement.
const FALLBACK_CHECKS: [Duration; 2] = [Duration::from_millis(100), Duration::from_millis(500)];

/// A scroll physics engine.
///
/// The engine replaces native scrolling with manually computed physics: it
/// consumes a stream of drag events and a stream of size measurements, and
/// produces the offset the host renderer should apply to its content each
/// frame.
///
/// All methods are meant to be called from the host's UI thread:
///
/// * forward drag gestures with [`on_drag_changed`](Self::on_drag_changed)
///   and [`on_drag_ended`](Self::on_drag_ended),
/// * report layout with [`content_resized`](Self::content_resized) and
///   [`viewport_resized`](Self::viewport_resized),
/// * call [`tick`](Self::tick) once per frame and keep redrawing while it
///   returns `true`,
/// * read [`offset`](Self::offset) when positioning the content.
///
/// ```
/// use flick_physics::{Engine, Settings};
/// use flick_core::time::Instant;
/// use flick_core::{Size, Vector};
///
/// let mut engine = Engine::new(Settings::default());
/// let now = Instant::now();
///
/// engine.viewport_resized(Size::new(300.0, 300.0));
/// engine.content_resized(Size::new(1_000.0, 2_000.0));
///
/// engine.on_drag_changed(Vector::new(-30.0, -40.0), now);
///
/// let offset = engine.offset(now);
/// assert_eq!(offset, Vector::new(-30.0, -40.0));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    settings: Settings,
    drag_offset: Vector,
    accumulated: Vector,
    velocity: VelocityEstimator,
    last_drag_position: Vector,
    last_update: Option<Instant>,
    interaction: Interaction,
    content_size: Size,
    viewport_size: Size,
    fallback_checks: Vec<Instant>,
}

/// What the engine is currently doing.
#[derive(Debug, Clone)]
enum Interaction {
    Idle,
    Dragging,
    Settling(Settle),
}

impl Engine {
    /// Creates a new [`Engine`] with the given [`Settings`].
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            drag_offset: Vector::ZERO,
            accumulated: Vector::ZERO,
            velocity: VelocityEstimator::new(),
            last_drag_position: Vector::ZERO,
            last_update: None,
            interaction: Interaction::Idle,
            content_size: Size::ZERO,
            viewport_size: Size::ZERO,
            fallback_checks: Vec::new(),
        }
    }

    /// The configuration of the [`Engine`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The axes along which scrolling is enabled.
    pub fn axes(&self) -> Axes {
        self.settings.axes
    }

    /// Whether the host renderer should draw scroll indicators.
    pub fn shows_indicators(&self) -> bool {
        self.settings.shows_indicators
    }

    /// The latest known content size. `Size::ZERO` components mean the
    /// measurement has not been reported yet.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The latest known viewport size.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// The current velocity estimate, in units per second.
    pub fn velocity(&self) -> Vector {
        self.velocity.value()
    }

    /// Whether a settle or inertia transition is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self.interaction, Interaction::Settling(_))
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.interaction, Interaction::Dragging)
    }

    /// Handles a drag-changed event.
    ///
    /// `translation` is the cumulative translation since the gesture
    /// started, in the host's coordinate space. A drag arriving while a
    /// settle or inertia transition is in flight cancels it and takes over
    /// from the currently displayed offset.
    pub fn on_drag_changed(&mut self, translation: Vector, now: Instant) {
        if !translation.is_finite() {
            log::warn!("ignoring non-finite drag translation");
            return;
        }

        if let Interaction::Settling(settle) = &self.interaction {
            self.accumulated = settle.value(now);
        }

        self.interaction = Interaction::Dragging;

        let delta = translation - self.last_drag_position;
        self.drag_offset = self.settings.axes.mask(translation);

        if let Some(last) = self.last_update {
            let dt = now.saturating_duration_since(last).as_secs_f32();

            self.velocity.update(
                self.settings.axes.mask(delta),
                dt,
                self.settings.axes,
                self.settings.speed_factor,
            );
        }

        self.last_drag_position = translation;
        self.last_update = Some(now);
    }

    /// Handles the end of a drag gesture.
    ///
    /// Commits the dragged displacement, settles it into the valid range
    /// and, if the release was fast enough, starts the inertia transition.
    pub fn on_drag_ended(&mut self, now: Instant) {
        let from = self.offset(now);

        self.accumulated = self.accumulated + self.settings.axes.mask(self.drag_offset);
        self.drag_offset = Vector::ZERO;
        self.last_drag_position = Vector::ZERO;
        self.last_update = None;
        self.interaction = Interaction::Idle;

        self.velocity.align(self.settings.axes);

        if self.settings.inertia_enabled && self.exceeds_minimum_velocity() {
            self.begin_inertia(from, now);
        } else {
            self.velocity.clear();
            self.commit(from, now);
        }
    }

    /// Reports a content measurement from the host's layout pass.
    pub fn content_resized(&mut self, size: Size) {
        self.content_size = size;
    }

    /// Reports a viewport measurement from the host's layout pass.
    pub fn viewport_resized(&mut self, size: Size) {
        self.viewport_size = size;
    }

    /// Notes that the hosting view appeared, scheduling the measurement
    /// fallback checks.
    pub fn on_appear(&mut self, now: Instant) {
        self.fallback_checks = FALLBACK_CHECKS.iter().map(|delay| now + *delay).collect();
    }

    /// Advances transitions and deferred checks.
    ///
    /// Returns whether the engine still needs further frames; the host
    /// should keep requesting redraws while this is `true`.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.run_due_fallback_checks(now);

        match &self.interaction {
            Interaction::Settling(settle) if !settle.is_animating(now) => {
                let settled = settle.target();
                let corrected = self.settle_step(settled);

                if corrected == settled {
                    self.velocity.clear();
                    self.interaction = Interaction::Idle;

                    !self.fallback_checks.is_empty()
                } else {
                    self.accumulated = corrected;
                    self.interaction = Interaction::Settling(Settle::new(settled, corrected, now));

                    true
                }
            }
            Interaction::Settling(_) => true,
            Interaction::Idle | Interaction::Dragging => !self.fallback_checks.is_empty(),
        }
    }

    /// The offset to apply to the content this frame.
    pub fn offset(&self, now: Instant) -> Vector {
        Vector::new(
            self.offset_along(Axis::Horizontal, now),
            self.offset_along(Axis::Vertical, now),
        )
    }

    /// The offset to apply to the content along one axis this frame.
    ///
    /// This is a pure read over the current state: during a settle it
    /// samples the transition, otherwise it resolves the raw offset
    /// through the elastic boundary path.
    pub fn offset_along(&self, axis: Axis, now: Instant) -> f32 {
        if let Interaction::Settling(settle) = &self.interaction {
            return axis.of(settle.value(now));
        }

        let current = axis.of(self.accumulated) + axis.of(self.drag_offset);

        bounds::elastic(
            current,
            axis.of_size(self.content_size),
            axis.of_size(self.viewport_size),
        )
    }

    /// The relative scroll position per axis, from 0 at the starting edge
    /// to 1 at the far edge.
    ///
    /// Axes that cannot scroll report 0. Hosts typically feed this to
    /// their indicator rendering.
    pub fn relative_offset(&self, now: Instant) -> Vector {
        let mut relative = Vector::ZERO;

        for axis in Axis::ALL {
            if !self.settings.axes.contains_axis(axis) {
                continue;
            }

            let (min, max) = bounds::range(
                axis.of_size(self.content_size),
                axis.of_size(self.viewport_size),
            );

            if min < max {
                let position = (self.offset_along(axis, now) - max) / (min - max);

                *axis.of_mut(&mut relative) = position.clamp(0.0, 1.0);
            }
        }

        relative
    }

    fn exceeds_minimum_velocity(&self) -> bool {
        let velocity = self.velocity.value();

        Axis::ALL.into_iter().any(|axis| {
            self.settings.axes.contains_axis(axis)
                && axis.of(velocity).abs() > self.settings.minimum_velocity
        })
    }

    /// Applies the one-shot inertia impulse and settles the result.
    fn begin_inertia(&mut self, from: Vector, now: Instant) {
        if self.is_animating() {
            return;
        }

        let velocity = self.velocity.value();
        let mut target = self.accumulated + self.settings.axes.mask(inertia::impulse(velocity));

        for axis in Axis::ALL {
            if !self.settings.axes.contains_axis(axis) {
                continue;
            }

            *axis.of_mut(&mut target) =
                inertia::check_reversal(axis.of(target), axis.of(velocity));
        }

        self.accumulated = target;
        self.commit(from, now);
    }

    /// Runs one commit step and animates the committed offset toward it.
    fn commit(&mut self, from: Vector, now: Instant) {
        let corrected = self.settle_step(self.accumulated);
        self.accumulated = corrected;

        if from == corrected {
            self.interaction = Interaction::Idle;
        } else {
            self.interaction = Interaction::Settling(Settle::new(from, corrected, now));
        }
    }

    /// One application of the commit path over every axis.
    fn settle_step(&self, offset: Vector) -> Vector {
        let mut corrected = offset;

        for axis in Axis::ALL {
            let component = axis.of_mut(&mut corrected);

            if !self.settings.axes.contains_axis(axis) {
                *component = 0.0;
                continue;
            }

            *component = bounds::settle(
                *component,
                axis.of_size(self.content_size),
                axis.of_size(self.viewport_size),
            );
        }

        corrected
    }

    fn run_due_fallback_checks(&mut self, now: Instant) {
        if self.fallback_checks.iter().all(|deadline| *deadline > now) {
            return;
        }

        self.fallback_checks.retain(|deadline| *deadline > now);
        self.estimate_content();
    }

    /// Synthesizes content lengths for enabled axes that are still
    /// unmeasured. Estimates only ever grow the known value.
    fn estimate_content(&mut self) {
        for axis in Axis::ALL {
            if !self.settings.axes.contains_axis(axis) {
                continue;
            }

            let current = axis.of_size(self.content_size);

            if current > 0.0 {
                continue;
            }

            let estimate = self.settings.content_estimate.along(axis);

            if estimate > current {
                log::debug!("estimating {axis:?} content length at {estimate}");

                *axis.of_size_mut(&mut self.content_size) = estimate;
            }
        }
    }
}
