//! Fallback content measurement for late or missing layout reports.
use flick_core::{Axis, Size};

/// Layout constants used to synthesize a content length for an axis the
/// measurement provider has not reported yet.
///
/// The estimate models the common case of a run of uniformly sized items:
/// `extent * count + spacing * (count - 1) + padding`. It only ever fills
/// in for a missing measurement; a real report always wins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentEstimate {
    /// Assumed extent of a single item along each axis.
    pub item_extent: Size,

    /// Assumed number of items.
    pub item_count: usize,

    /// Assumed spacing between adjacent items.
    pub spacing: f32,

    /// Assumed total padding around the run of items.
    pub padding: f32,
}

impl ContentEstimate {
    /// The synthesized content length along the given [`Axis`].
    pub fn along(&self, axis: Axis) -> f32 {
        if self.item_count == 0 {
            return self.padding;
        }

        let count = self.item_count as f32;

        axis.of_size(self.item_extent) * count + self.spacing * (count - 1.0) + self.padding
    }
}

impl Default for ContentEstimate {
    fn default() -> Self {
        Self {
            item_extent: Size::new(120.0, 44.0),
            item_count: 20,
            spacing: 8.0,
            padding: 16.0,
        }
    }
}
