//! Math utility functions.

use num_traits::Float;

use crate::Component;

/// A position on a control surface, in the surface's own coordinates.
pub type Point = euclid::default::Point2D<Component>;

/// The offset between two [`Point`]s.
pub type Vector = euclid::default::Vector2D<Component>;

/// The measured size of a control surface.
pub type Size = euclid::default::Size2D<Component>;

/// Clamp a value into `[0, 1]`. NaN becomes 0.
pub fn clamp_unit<T: Float>(value: T) -> T {
    // `max` returns the non-NaN operand.
    value.max(T::zero()).min(T::one())
}

/// Divide `numerator` by `denominator`, returning 0 if the denominator is not
/// a positive number.
pub fn ratio_or_zero<T: Float>(numerator: T, denominator: T) -> T {
    if denominator > T::zero() {
        numerator / denominator
    } else {
        T::zero()
    }
}

/// Wrap a hue in degrees into `[0, 360)`.
pub fn normalize_hue(hue: Component) -> Component {
    let hue = hue.rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// The angle of `offset` measured clockwise (y grows downward) from the
/// positive x-axis, in degrees within `[0, 360)`.
pub fn hue_of(offset: Vector) -> Component {
    normalize_hue(offset.y.atan2(offset.x).to_degrees())
}

/// The length of `offset`. Unlike `Vector2D::length` this does not overflow
/// to infinity for huge but finite offsets.
pub fn length(offset: Vector) -> Component {
    offset.x.hypot(offset.y)
}

/// Size of the smaller side of `size`, never negative.
pub fn min_side(size: Size) -> Component {
    size.width.min(size.height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use euclid::default::Vector2D;

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.5_f32), 0.0);
        assert_eq!(clamp_unit(0.25_f32), 0.25);
        assert_eq!(clamp_unit(7.0_f64), 1.0);
        assert_eq!(clamp_unit(f32::NAN), 0.0);
    }

    #[test]
    fn ratio_guards_degenerate_denominators() {
        assert_eq!(ratio_or_zero(1.0_f32, 4.0), 0.25);
        assert_eq!(ratio_or_zero(1.0_f32, 0.0), 0.0);
        assert_eq!(ratio_or_zero(1.0_f32, -2.0), 0.0);
        assert_eq!(ratio_or_zero(1.0_f32, f32::NAN), 0.0);
    }

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert!(normalize_hue(-1.0e-7) < 360.0);
        assert!(normalize_hue(Component::NAN).is_nan());
    }

    #[test]
    fn length_of_huge_offsets_is_finite() {
        assert_eq!(length(Vector::new(3.0, -4.0)), 5.0);
        assert_eq!(length(Vector::zero()), 0.0);

        let huge = length(Vector::new(1.0e30, 1.0e30));
        assert!(huge.is_finite());
        assert!(huge > 1.0e30);
    }

    #[test]
    fn hue_of_cardinal_directions() {
        assert_component_eq!(hue_of(Vector2D::new(1.0, 0.0)), 0.0);
        assert_component_eq!(hue_of(Vector2D::new(0.0, 1.0)), 90.0);
        assert_component_eq!(hue_of(Vector2D::new(-1.0, 0.0)), 180.0);
        assert_component_eq!(hue_of(Vector2D::new(0.0, -1.0)), 270.0);
        assert_eq!(hue_of(Vector2D::new(0.0, 0.0)), 0.0);
    }
}
