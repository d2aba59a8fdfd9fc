//! A circular layout picking hue and saturation.

use super::Layout;
use crate::{
    color::{Channels, Components, HsvColor},
    math::{clamp_unit, hue_of, length, min_side, ratio_or_zero, Point, Size, Vector},
    Component,
};

/// A disc where the angle around the center picks the hue and the distance
/// from the center picks the saturation.
///
/// A hue of 0 points along the positive x-axis. With y growing downward, the
/// hue grows clockwise, so the top of the disc is at 270 degrees.
///
/// A tap is only accepted on the disc (the boundary included). A drag is
/// never rejected: positions outside the disc are clamped onto its edge so
/// the thumb keeps following the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    /// The center of the disc.
    pub center: Point,
    /// The radius of the disc. Saturation is 1 at this distance from the
    /// center.
    pub radius: Component,
}

impl Disc {
    /// Create a new disc.
    pub fn new(center: Point, radius: Component) -> Self {
        Self { center, radius }
    }

    /// The largest disc that fits in the middle of a surface of `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(
            Point::new(size.width / 2.0, size.height / 2.0),
            min_side(size) / 2.0,
        )
    }

    /// The radius, with negative and NaN radii treated as 0.
    fn reach(&self) -> Component {
        self.radius.max(0.0)
    }

    /// Returns true if `position` is on the disc.
    pub fn contains(&self, position: Point) -> bool {
        let reach = self.reach();
        (position - self.center).square_length() <= reach * reach
    }

    /// The hue and saturation at `position`. The saturation is clamped to 1
    /// for positions outside the disc and is 0 for a disc without area.
    pub fn hue_saturation_at(&self, position: Point) -> (Component, Component) {
        let offset = position - self.center;
        let saturation = clamp_unit(ratio_or_zero(length(offset), self.radius));
        (hue_of(offset), saturation)
    }

    /// The hue and saturation at `position`, or `None` if `position` is not
    /// on the disc.
    pub fn tap(&self, position: Point) -> Option<(Component, Component)> {
        self.contains(position)
            .then(|| self.hue_saturation_at(position))
    }

    /// The hue and saturation at `position` after clamping it onto the disc.
    pub fn drag(&self, position: Point) -> (Component, Component) {
        self.hue_saturation_at(self.clamp_to_radius(position))
    }

    /// Positions on the disc are returned unchanged. Any other position is
    /// moved onto the edge of the disc along the ray from the center.
    pub fn clamp_to_radius(&self, position: Point) -> Point {
        let offset = position - self.center;
        let reach = self.reach();
        if offset.square_length() <= reach * reach {
            return position;
        }

        // The offset is longer than the radius, so its length is not 0.
        self.center + offset * (reach / length(offset))
    }

    /// Where the thumb for `hue` and `saturation` is drawn.
    pub fn thumb_position(&self, hue: Component, saturation: Component) -> Point {
        let angle = hue.to_radians();
        let distance = clamp_unit(saturation) * self.reach();
        self.center + Vector::new(angle.cos(), angle.sin()) * distance
    }
}

impl Layout for Disc {
    fn channels(&self) -> Channels {
        Channels::HUE | Channels::SATURATION
    }

    fn hit_test(&self, position: Point) -> bool {
        self.contains(position)
    }

    fn components_at(&self, position: Point) -> Components {
        let (hue, saturation) = self.drag(position);
        Components(hue, saturation, 0.0)
    }

    fn thumb_at(&self, color: &HsvColor) -> Point {
        self.thumb_position(color.hue(), color.saturation())
    }
}
