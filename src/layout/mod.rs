//! Layouts map a pointer position on a control surface to the color
//! components the surface controls, and map a color back to the position of
//! the thumb that marks it.
//!
//! Every mapping is a pure function of the layout's geometry and its input.
//! Positions outside the surface are never an error: taps outside the
//! hit region return `None` and drags are clamped.
//!
//! ```rust
//! use pipette::layout::{Disc, Layout};
//! use pipette::{HsvColor, Point, Size};
//!
//! let disc = Disc::from_size(Size::new(128.0, 128.0));
//! let color = disc
//!     .tap_color(Point::new(64.0, 0.0), HsvColor::new(0.0, 1.0, 1.0))
//!     .unwrap();
//! assert_eq!(color.hue().round(), 270.0);
//! ```

use crate::color::{Channels, Components, HsvColor};
use crate::math::Point;

mod disc;
mod rectangle;
mod ring;

pub use disc::Disc;
pub use rectangle::Rectangle;
pub use ring::Ring;

/// A control surface that picks some of the components of an [`HsvColor`].
pub trait Layout {
    /// The components this layout picks. The rest are taken from the color
    /// the caller passes in.
    fn channels(&self) -> Channels;

    /// Returns true if a press at `position` may start a gesture.
    fn hit_test(&self, position: Point) -> bool;

    /// The components at `position` while dragging. This never rejects a
    /// position; components outside [`Layout::channels`] are 0.
    fn components_at(&self, position: Point) -> Components;

    /// Where the thumb for `color` is drawn.
    fn thumb_at(&self, color: &HsvColor) -> Point;

    /// Update `current` with the components at `position`.
    fn color_at(&self, position: Point, current: HsvColor) -> HsvColor {
        current.merge(self.components_at(position), self.channels())
    }

    /// Update `current` with the components at `position`, or return `None`
    /// if `position` is outside of the hit region.
    fn tap_color(&self, position: Point, current: HsvColor) -> Option<HsvColor> {
        if self.hit_test(position) {
            Some(self.color_at(position, current))
        } else {
            None
        }
    }
}

impl<L: Layout + ?Sized> Layout for &L {
    fn channels(&self) -> Channels {
        (**self).channels()
    }

    fn hit_test(&self, position: Point) -> bool {
        (**self).hit_test(position)
    }

    fn components_at(&self, position: Point) -> Components {
        (**self).components_at(position)
    }

    fn thumb_at(&self, color: &HsvColor) -> Point {
        (**self).thumb_at(color)
    }
}

impl<L: Layout + ?Sized> Layout for Box<L> {
    fn channels(&self) -> Channels {
        (**self).channels()
    }

    fn hit_test(&self, position: Point) -> bool {
        (**self).hit_test(position)
    }

    fn components_at(&self, position: Point) -> Components {
        (**self).components_at(position)
    }

    fn thumb_at(&self, color: &HsvColor) -> Point {
        (**self).thumb_at(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::Component;

    fn layouts() -> Vec<Box<dyn Layout>> {
        let size = Size::new(128.0, 128.0);
        vec![
            Box::new(Disc::from_size(size)),
            Box::new(Ring::from_size(size, 16.0)),
            Box::new(Rectangle::new(size)),
        ]
    }

    #[test]
    fn channels_per_layout() {
        let channels = layouts().iter().map(|l| l.channels()).collect::<Vec<_>>();
        assert_eq!(
            channels,
            vec![
                Channels::HUE | Channels::SATURATION,
                Channels::HUE,
                Channels::SATURATION | Channels::VALUE,
            ]
        );
    }

    #[test]
    fn unpicked_channels_come_from_current() {
        let current = HsvColor::new(120.0, 0.25, 0.5);
        let position = Point::new(100.0, 40.0);

        for layout in layouts() {
            let color = layout.color_at(position, current);
            let channels = layout.channels();
            if !channels.contains(Channels::HUE) {
                assert_eq!(color.hue(), current.hue());
            }
            if !channels.contains(Channels::SATURATION) {
                assert_eq!(color.saturation(), current.saturation());
            }
            if !channels.contains(Channels::VALUE) {
                assert_eq!(color.value(), current.value());
            }
        }
    }

    #[test]
    fn tap_color_follows_hit_test() {
        let current = HsvColor::new(120.0, 0.25, 0.5);

        for layout in layouts() {
            for position in [
                Point::new(64.0, 64.0),
                Point::new(64.0, 2.0),
                Point::new(500.0, -500.0),
            ] {
                let tapped = layout.tap_color(position, current);
                if layout.hit_test(position) {
                    assert_eq!(tapped, Some(layout.color_at(position, current)));
                } else {
                    assert_eq!(tapped, None);
                }
            }
        }
    }

    #[test]
    fn degenerate_surfaces_do_not_fault() {
        let current = HsvColor::new(120.0, 0.25, 0.5);
        let empty: Vec<Box<dyn Layout>> = vec![
            Box::new(Disc::from_size(Size::zero())),
            Box::new(Ring::from_size(Size::zero(), 16.0)),
            Box::new(Rectangle::new(Size::zero())),
            Box::new(Rectangle::new(Size::new(-10.0, Component::NAN))),
        ];

        for layout in empty {
            for position in [Point::zero(), Point::new(3.0, -4.0)] {
                let color = layout.color_at(position, current);
                let thumb = layout.thumb_at(&color);
                assert!(!thumb.x.is_infinite() && !thumb.y.is_infinite());
                layout.tap_color(position, current);
            }
        }
    }
}
