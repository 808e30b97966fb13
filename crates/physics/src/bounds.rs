//! Resolve scroll offsets against content and viewport geometry.
//!
//! Offsets follow the start-anchored convention: `0` rests the content at
//! its starting edge and scrolling forward moves the offset negative, down
//! to `viewport - content` for content longer than its viewport.
//!
//! Two read paths share this geometry. [`elastic`] is the live path the
//! host samples every frame; it renders overscroll as damped resistance.
//! [`settle`] is one step of the commit path invoked on drag end and at
//! each settle tick; repeated application converges the committed offset
//! to a valid resting value.

/// Damping applied to the distance past a boundary. Lower = stiffer.
pub(crate) const BOUNCE: f32 = 0.2;

/// Content within this margin of the viewport length is treated as
/// filling it, so near-equal sizes do not flip between behaviors.
pub(crate) const SIZE_MARGIN: f32 = 20.0;

/// Damping of the raw offset while sizes are unknown.
const UNMEASURED_DRAG: f32 = 0.8;

/// Damping of the raw offset when the content fits its viewport.
const SMALL_DRAG: f32 = 0.6;

/// Settled offsets below this magnitude snap to exact rest.
const REST_EPSILON: f32 = 1.0;

/// Whether the content is small enough that this axis never scrolls.
pub(crate) fn is_small(content: f32, viewport: f32) -> bool {
    content < viewport - SIZE_MARGIN
}

/// The valid resting range of the offset along one axis, as `(min, max)`.
///
/// `min` never exceeds `max`: content inside the size margin would
/// otherwise produce an inverted range.
pub(crate) fn range(content: f32, viewport: f32) -> (f32, f32) {
    let max = 0.0;

    let effective = if content < viewport {
        viewport - SIZE_MARGIN
    } else {
        content
    };

    ((viewport - effective).min(max), max)
}

/// The offset to display for a raw offset of `current` along one axis.
///
/// Inside the valid range this is the identity. Past a boundary the
/// overshoot is damped by [`BOUNCE`], which renders as elastic
/// resistance. Unmeasured or undersized content falls back to damped
/// free scrolling so the axis stays draggable.
pub fn elastic(current: f32, content: f32, viewport: f32) -> f32 {
    if content <= 0.0 || viewport <= 0.0 {
        return current * UNMEASURED_DRAG;
    }

    if is_small(content, viewport) {
        return current * SMALL_DRAG;
    }

    let (min, max) = range(content, viewport);

    if current > max {
        max + (current - max) * BOUNCE
    } else if current < min {
        min - (min - current) * BOUNCE
    } else {
        current
    }
}

/// One step of the commit path: the value the offset should settle toward.
///
/// Scrollable content clamps hard into its valid range. Content that never
/// needed to scroll decays toward zero instead, faster the further out it
/// sits; damped results under [`REST_EPSILON`] snap to exactly zero so the
/// decay terminates. While either length is unmeasured the offset is left
/// untouched and free scrolling is preserved.
pub fn settle(offset: f32, content: f32, viewport: f32) -> f32 {
    if content <= 0.0 || viewport <= 0.0 {
        return offset;
    }

    if is_small(content, viewport) {
        let damped = match offset.abs() {
            magnitude if magnitude > 100.0 => offset * 0.5,
            magnitude if magnitude > 50.0 => offset * 0.7,
            _ => offset * 0.9,
        };

        if damped.abs() < REST_EPSILON { 0.0 } else { damped }
    } else {
        let (min, max) = range(content, viewport);

        offset.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_for_long_content() {
        assert_eq!(range(1_000.0, 300.0), (-700.0, 0.0));
    }

    #[test]
    fn test_range_inside_margin_is_never_inverted() {
        // Content 10 units short of the viewport: the raw formula would
        // put the minimum above the maximum.
        let (min, max) = range(290.0, 300.0);
        assert!(min <= max);
        assert_eq!((min, max), (0.0, 0.0));
    }

    #[test]
    fn test_elastic_is_identity_inside_range() {
        assert_eq!(elastic(0.0, 1_000.0, 300.0), 0.0);
        assert_eq!(elastic(-350.0, 1_000.0, 300.0), -350.0);
        assert_eq!(elastic(-700.0, 1_000.0, 300.0), -700.0);
    }

    #[test]
    fn test_elastic_damps_overscroll() {
        // 50 units past either edge renders as 10.
        assert_eq!(elastic(50.0, 1_000.0, 300.0), 10.0);
        assert_eq!(elastic(-750.0, 1_000.0, 300.0), -710.0);
    }

    #[test]
    fn test_elastic_is_monotonic() {
        let mut previous = f32::NEG_INFINITY;

        for step in -200..=200 {
            let current = step as f32 * 10.0;
            let displayed = elastic(current, 1_000.0, 300.0);

            assert!(displayed >= previous, "reversed at current = {current}");
            previous = displayed;
        }
    }

    #[test]
    fn test_elastic_small_content_resists() {
        assert!((elastic(100.0, 200.0, 300.0) - 60.0).abs() < 1e-3);
        assert!((elastic(-100.0, 200.0, 300.0) - -60.0).abs() < 1e-3);
    }

    #[test]
    fn test_elastic_unmeasured_scrolls_soft() {
        assert!((elastic(100.0, 0.0, 300.0) - 80.0).abs() < 1e-3);
        assert!((elastic(100.0, 1_000.0, 0.0) - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_settle_clamps_long_content() {
        assert_eq!(settle(-750.0, 1_000.0, 300.0), -700.0);
        assert_eq!(settle(35.0, 1_000.0, 300.0), 0.0);
        assert_eq!(settle(-350.0, 1_000.0, 300.0), -350.0);
    }

    #[test]
    fn test_settle_small_content_converges_to_zero() {
        let mut offset = 150.0;
        let mut iterations = 0;

        while offset != 0.0 {
            let next = settle(offset, 200.0, 300.0);

            // Every step sheds at least 10% of the magnitude.
            assert!(next.abs() <= offset.abs() * 0.9);

            offset = next;
            iterations += 1;
            assert!(iterations < 64, "did not converge");
        }

        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_settle_tiers() {
        assert_eq!(settle(150.0, 200.0, 300.0), 75.0);
        assert!((settle(80.0, 200.0, 300.0) - 56.0).abs() < 1e-3);
        assert!((settle(-40.0, 200.0, 300.0) - -36.0).abs() < 1e-3);
        assert_eq!(settle(0.5, 200.0, 300.0), 0.0);
    }

    #[test]
    fn test_settle_unmeasured_is_identity() {
        assert_eq!(settle(123.0, 0.0, 300.0), 123.0);
        assert_eq!(settle(-123.0, 500.0, 0.0), -123.0);
    }
}
