//! A ring layout picking only the hue.

use super::Layout;
use crate::{
    color::{Channels, Components, HsvColor},
    math::{hue_of, min_side, Point, Size, Vector},
    Component,
};

/// A band around a center point where the angle picks the hue.
///
/// Angles are measured like on a [`super::Disc`]. A tap must land within the
/// band, edges included. Once a gesture has started, every position maps to
/// a hue regardless of its distance from the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// The center of the ring.
    pub center: Point,
    /// Distance from the center to the middle of the band.
    pub radius: Component,
    /// Width of the band.
    pub stroke_width: Component,
}

impl Ring {
    /// Create a new ring.
    pub fn new(center: Point, radius: Component, stroke_width: Component) -> Self {
        Self {
            center,
            radius,
            stroke_width,
        }
    }

    /// The largest ring with a band of `stroke_width` that fits in the middle
    /// of a surface of `size`.
    pub fn from_size(size: Size, stroke_width: Component) -> Self {
        Self::new(
            Point::new(size.width / 2.0, size.height / 2.0),
            (min_side(size) - stroke_width) / 2.0,
            stroke_width,
        )
    }

    /// Returns true if `position` is within the band. The inner edge is
    /// `|radius - stroke_width / 2|`, so a band wider than twice the radius
    /// still leaves a hole around the center.
    pub fn in_band(&self, position: Point) -> bool {
        let half_stroke = self.stroke_width.max(0.0) / 2.0;
        let inner = self.radius - half_stroke;
        let outer = self.radius + half_stroke;

        let distance_squared = (position - self.center).square_length();
        // A band that does not reach past the center has nothing to hit.
        outer > 0.0 && inner * inner <= distance_squared && distance_squared <= outer * outer
    }

    /// The hue at `position`.
    pub fn hue_at(&self, position: Point) -> Component {
        hue_of(position - self.center)
    }

    /// The hue at `position`, or `None` if `position` is not within the band.
    pub fn tap(&self, position: Point) -> Option<Component> {
        self.in_band(position).then(|| self.hue_at(position))
    }

    /// The hue at `position` during a drag. This never rejects a position.
    pub fn drag(&self, position: Point) -> Component {
        self.hue_at(position)
    }

    /// Where the thumb for `hue` is drawn, in the middle of the band.
    pub fn thumb_position(&self, hue: Component) -> Point {
        let angle = hue.to_radians();
        self.center + Vector::new(angle.cos(), angle.sin()) * self.radius.max(0.0)
    }
}

impl Layout for Ring {
    fn channels(&self) -> Channels {
        Channels::HUE
    }

    fn hit_test(&self, position: Point) -> bool {
        self.in_band(position)
    }

    fn components_at(&self, position: Point) -> Components {
        Components(self.drag(position), 0.0, 0.0)
    }

    fn thumb_at(&self, color: &HsvColor) -> Point {
        self.thumb_position(color.hue())
    }
}
