/// An amount of space in 2 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size<T = f32> {
    /// The width.
    pub width: T,

    /// The height.
    pub height: T,
}

impl<T> Size<T> {
    /// Creates a new [`Size`] with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl Size {
    /// A [`Size`] with zero width and height.
    ///
    /// Measurements use this as the "not reported yet" sentinel.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// A [`Size`] with a width and height of 1 unit.
    pub const UNIT: Self = Self::new(1.0, 1.0);
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Self { width, height }
    }
}

impl<T> From<[T; 2]> for Size<T> {
    fn from([width, height]: [T; 2]) -> Self {
        Self { width, height }
    }
}
