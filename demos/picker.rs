use pipette::gesture::Gesture;
use pipette::layout::{Disc, Layout, Rectangle, Ring};
use pipette::{HsvColor, Point, Size};

pub fn main() {
    let size = Size::new(128.0, 128.0);
    let mut color: HsvColor = "#D2691E".parse().expect("valid hex color");

    // Pick the hue on a ring, then saturation and value on a square.
    let mut ring = Gesture::new(Ring::from_size(size, 16.0));
    color = ring.press(Point::new(64.0, 0.0), color).unwrap_or(color);
    color = ring.drag(Point::new(120.0, 64.0), color).unwrap_or(color);
    assert!(ring.release());

    let square = Rectangle::new(size);
    color = square.color_at(Point::new(96.0, 32.0), color);

    let disc = Disc::from_size(size);
    let thumb = disc.thumb_at(&color);

    // hue 0, saturation 0.75, value 0.75
    dbg!(color, color.to_hex(), thumb);

    let saved = color.to_i64();
    assert_eq!(HsvColor::from_i64(saved), color);
}
