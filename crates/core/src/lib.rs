//! The essential concepts of flick.
//!
//! This crate holds the small, dependency-light vocabulary the physics
//! engine is written in: 2D geometry ([`Vector`], [`Size`]), scroll axis
//! selection ([`Axes`], [`Axis`]), a [`time`] module that works on both
//! native and Wasm targets, and an [`Animation`] helper for time-sliced
//! transitions.
pub mod time;

mod animation;
mod axes;
mod size;
mod vector;

pub use animation::{Animation, Easing, Interpolable};
pub use axes::{Axes, Axis};
pub use size::Size;
pub use vector::Vector;
