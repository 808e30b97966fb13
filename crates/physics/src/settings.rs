//! Configure a scroll physics [`Engine`](crate::Engine).
use crate::measure::ContentEstimate;

use flick_core::Axes;

/// The configuration of an [`Engine`](crate::Engine).
///
/// ```
/// use flick_physics::Settings;
/// use flick_core::Axes;
///
/// let settings = Settings {
///     axes: Axes::HORIZONTAL,
///     inertia_enabled: false,
///     ..Settings::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// The axes along which scrolling is enabled.
    pub axes: Axes,

    /// Whether the host renderer should draw scroll indicators.
    ///
    /// The physics never consumes this; it is forwarded through
    /// [`Engine::shows_indicators`](crate::Engine::shows_indicators).
    pub shows_indicators: bool,

    /// Multiplier amplifying raw drag speed into scroll velocity.
    ///
    /// Drag gestures produce smaller per-event deltas than native momentum
    /// scrolling expects; values above 1 compensate.
    pub speed_factor: f32,

    /// Reserved decay multiplier for a continuous-deceleration inertia
    /// model.
    ///
    /// The one-shot impulse physics in use does not consume it; it is kept
    /// in the surface for configurations that already carry it.
    pub momentum_decrease_factor: f32,

    /// Minimum release speed, in units per second, for inertia to trigger.
    pub minimum_velocity: f32,

    /// Whether releasing a fast drag starts an inertia animation.
    pub inertia_enabled: bool,

    /// Layout constants for the content measurement fallback.
    pub content_estimate: ContentEstimate,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            axes: Axes::ALL,
            shows_indicators: true,
            speed_factor: 1.2,
            momentum_decrease_factor: 0.95,
            minimum_velocity: 3.0,
            inertia_enabled: true,
            content_estimate: ContentEstimate::default(),
        }
    }
}
