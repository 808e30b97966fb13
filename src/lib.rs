//! flick is a scroll physics engine for drag-driven scrolling.
//!
//! It replaces a platform's native scroll mechanism with manually computed
//! physics: drag tracking, velocity estimation, inertial deceleration, and
//! elastic boundary bounce-back, driven by a pointer drag gesture instead
//! of native touch scrolling.
//!
//! flick renders nothing and recognizes no gestures itself. The host
//! framework owns hit-testing, gesture delivery, and drawing; the engine
//! consumes two streams and produces one value:
//!
//! * drag-changed and drag-ended events, carrying the cumulative
//!   translation since the gesture started,
//! * content and viewport size measurements, reported whenever the host's
//!   layout knows them,
//! * → the 2D offset to apply to the content, sampled once per frame.
//!
//! # Example
//! ```
//! use flick::time::Instant;
//! use flick::{Axes, Engine, Settings, Size, Vector};
//!
//! let mut engine = Engine::new(Settings {
//!     axes: Axes::VERTICAL,
//!     ..Settings::default()
//! });
//!
//! // Wire these to the host's layout and gesture callbacks.
//! engine.viewport_resized(Size::new(400.0, 600.0));
//! engine.content_resized(Size::new(400.0, 3_000.0));
//!
//! let now = Instant::now();
//! engine.on_drag_changed(Vector::new(0.0, -120.0), now);
//! engine.on_drag_ended(now);
//!
//! // Every frame: keep redrawing while `tick` asks for it, and position
//! // the content at `offset`.
//! let _needs_redraw = engine.tick(now);
//! let offset = engine.offset(now);
//! assert!(offset.y <= 0.0);
//! ```
pub use flick_core as core;
pub use flick_physics as physics;

pub use crate::core::time;
pub use crate::core::{Animation, Axes, Axis, Easing, Size, Vector};
pub use physics::{ContentEstimate, Engine, Settings, VelocityEstimator, bounds};
