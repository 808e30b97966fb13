//! Select and address the scroll directions of an engine.
use crate::{Size, Vector};

bitflags::bitflags! {
    /// The set of directions along which scrolling is enabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Axes: u8 {
        /// Horizontal scrolling.
        const HORIZONTAL = 1 << 0;

        /// Vertical scrolling.
        const VERTICAL = 1 << 1;
    }
}

impl Axes {
    /// Both scroll directions.
    pub const ALL: Self = Self::all();

    /// Whether the given [`Axis`] is enabled.
    pub fn contains_axis(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.contains(Self::HORIZONTAL),
            Axis::Vertical => self.contains(Self::VERTICAL),
        }
    }

    /// Zeroes the components of the given [`Vector`] on every disabled
    /// axis.
    pub fn mask(self, vector: Vector) -> Vector {
        Vector::new(
            if self.contains(Self::HORIZONTAL) {
                vector.x
            } else {
                0.0
            },
            if self.contains(Self::VERTICAL) {
                vector.y
            } else {
                0.0
            },
        )
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Axes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Axes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;

        Ok(Self::from_bits_truncate(bits))
    }
}

/// A single scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The horizontal direction.
    Horizontal,

    /// The vertical direction.
    Vertical,
}

impl Axis {
    /// Both axes, in iteration order.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The component of the given [`Vector`] along this [`Axis`].
    pub fn of(self, vector: Vector) -> f32 {
        match self {
            Self::Horizontal => vector.x,
            Self::Vertical => vector.y,
        }
    }

    /// A mutable reference to the component of the given [`Vector`] along
    /// this [`Axis`].
    pub fn of_mut(self, vector: &mut Vector) -> &mut f32 {
        match self {
            Self::Horizontal => &mut vector.x,
            Self::Vertical => &mut vector.y,
        }
    }

    /// The extent of the given [`Size`] along this [`Axis`].
    pub fn of_size(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// A mutable reference to the extent of the given [`Size`] along this
    /// [`Axis`].
    pub fn of_size_mut(self, size: &mut Size) -> &mut f32 {
        match self {
            Self::Horizontal => &mut size.width,
            Self::Vertical => &mut size.height,
        }
    }
}
