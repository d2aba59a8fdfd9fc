//! A rectangular layout picking saturation and value at a fixed hue.

use super::Layout;
use crate::{
    color::{Channels, Components, HsvColor},
    math::{clamp_unit, Point, Size},
    Component,
};

/// A rectangle where the horizontal position picks the saturation and the
/// vertical position picks the value.
///
/// Saturation grows from the left edge to the right edge. Value is 1 at the
/// top edge and 0 at the bottom edge. Positions outside of the rectangle are
/// clamped onto it, so nothing is ever rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    /// The size of the rectangle, with its origin at (0, 0).
    pub size: Size,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    /// The saturation and value at `position`. A rectangle without width has
    /// a saturation of 0 everywhere, and one without height a value of 0.
    pub fn saturation_value_at(&self, position: Point) -> (Component, Component) {
        let Size { width, height, .. } = self.size;
        let clamped = position.clamp(Point::zero(), self.size.to_vector().to_point());

        let saturation = if width > 0.0 { clamped.x / width } else { 0.0 };
        let value = if height > 0.0 {
            1.0 - clamped.y / height
        } else {
            0.0
        };

        (saturation, value)
    }

    /// Where the thumb for `saturation` and `value` is drawn.
    pub fn thumb_position(&self, saturation: Component, value: Component) -> Point {
        let width = self.size.width.max(0.0);
        let height = self.size.height.max(0.0);
        Point::new(
            clamp_unit(saturation) * width,
            height - clamp_unit(value) * height,
        )
    }
}

impl Layout for Rectangle {
    fn channels(&self) -> Channels {
        Channels::SATURATION | Channels::VALUE
    }

    fn hit_test(&self, _position: Point) -> bool {
        true
    }

    fn components_at(&self, position: Point) -> Components {
        let (saturation, value) = self.saturation_value_at(position);
        Components(0.0, saturation, value)
    }

    fn thumb_at(&self, color: &HsvColor) -> Point {
        self.thumb_position(color.saturation(), color.value())
    }
}
