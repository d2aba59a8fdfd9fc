//! Conversions between the HSV notation and RGB.
//!
//! Converting from RGB is lossy. When the red, green and blue components are
//! equal there is no hue, so every grey converts to a hue of 0 and a
//! saturation of 0.
//!
//! ```rust
//! use pipette::HsvColor;
//! let red = HsvColor::from_argb(0xFFFF0000);
//! assert_eq!(red, HsvColor::new(0.0, 1.0, 1.0));
//! assert_eq!(red.to_hex(), "#FF0000");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{
    color::{Component, Components, HsvColor},
    error::ParseColorError,
    math::clamp_unit,
};

impl HsvColor {
    /// Create a color from red, green and blue components in `[0, 1]`.
    pub fn from_rgb(red: Component, green: Component, blue: Component) -> Self {
        Self::from_components(util::rgb_to_hsv(&Components(red, green, blue)))
    }

    /// Create a color from the red, green and blue bytes of an ARGB integer.
    /// The alpha byte is ignored.
    pub fn from_argb(argb: u32) -> Self {
        Self::from_argb64(argb as u64)
    }

    /// Create a color from the low 24 bits of an ARGB integer. Every other bit
    /// is ignored.
    pub fn from_argb64(argb: u64) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xFF) as Component / 255.0;
        Self::from_rgb(channel(16), channel(8), channel(0))
    }

    /// Convert this color to red, green and blue components in `[0, 1]`.
    pub fn to_rgb(&self) -> Components {
        util::hsv_to_rgb(&self.to_components())
    }

    /// The red component of the color in `[0, 1]`.
    pub fn red(&self) -> Component {
        util::hsv_to_rgb_channel(5.0, &self.to_components())
    }

    /// The green component of the color in `[0, 1]`.
    pub fn green(&self) -> Component {
        util::hsv_to_rgb_channel(3.0, &self.to_components())
    }

    /// The blue component of the color in `[0, 1]`.
    pub fn blue(&self) -> Component {
        util::hsv_to_rgb_channel(1.0, &self.to_components())
    }

    /// Convert this color to red, green and blue bytes.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let Components(red, green, blue) = self.to_rgb().map(|c| (clamp_unit(c) * 255.0).round());
        [red as u8, green as u8, blue as u8]
    }

    /// Convert this color to an opaque ARGB integer.
    pub fn to_argb(&self) -> u32 {
        let [red, green, blue] = self.to_rgb8();
        0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
    }

    /// Format this color as `#RRGGBB` with uppercase digits.
    pub fn to_hex(&self) -> String {
        let [red, green, blue] = self.to_rgb8();
        format!("#{red:02X}{green:02X}{blue:02X}")
    }

    /// Returns true if the color is closer to black than to white, based on
    /// its relative luminance.
    pub fn is_dark(&self) -> bool {
        let Components(red, green, blue) = self.to_rgb();
        0.2126 * red + 0.7152 * green + 0.0722 * blue < 0.5
    }

    /// White for dark colors and black for light ones. Useful for anything
    /// drawn on top of the color, like the border of a thumb.
    pub fn contrasting(&self) -> Self {
        if self.is_dark() {
            Self::new(0.0, 0.0, 1.0)
        } else {
            Self::new(0.0, 0.0, 0.0)
        }
    }
}

impl From<u32> for HsvColor {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for HsvColor {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` or `#RGB`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());

        let nibbles = digits
            .chars()
            .map(|c| c.to_digit(16).ok_or(ParseColorError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let rgb = match *nibbles.as_slice() {
            [r, g, b] => [r * 17, g * 17, b * 17],
            [r1, r0, g1, g0, b1, b0] => [r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0],
            _ => return Err(ParseColorError::InvalidLength(nibbles.len())),
        };

        Ok(Self::from_argb(rgb[0] << 16 | rgb[1] << 8 | rgb[2]))
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Calculate one RGB channel from HSV components. `n` selects the
    /// channel: 5 for red, 3 for green and 1 for blue.
    pub fn hsv_to_rgb_channel(n: Component, from: &Components) -> Component {
        let Components(hue, saturation, value) = *from;
        let k = (n + hue / 60.0) % 6.0;
        value - value * saturation * k.min(4.0 - k).min(1.0).max(0.0)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        Components(
            hsv_to_rgb_channel(5.0, from),
            hsv_to_rgb_channel(3.0, from),
            hsv_to_rgb_channel(1.0, from),
        )
    }

    /// Convert from RGB notation to HSV notation. Without any chroma the hue
    /// is 0.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = 60.0
            * if delta == 0.0 {
                0.0
            } else if max == red {
                ((green - blue) / delta) % 6.0
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

        Components(hue, saturation, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn constructors_agree() {
        let colors = [
            HsvColor::from_argb(0xFF0000),
            HsvColor::from_argb64(0xFF0000),
            HsvColor::from(0xFFFF_0000_u32),
            HsvColor::new(0.0, 1.0, 1.0),
            HsvColor::from_rgb(1.0, 0.0, 0.0),
            "#FF0000".parse().unwrap(),
        ];

        for a in &colors {
            for b in &colors {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn argb64_ignores_high_bits() {
        assert_eq!(
            HsvColor::from_argb64(0xDEAD_BEEF_FF00_FF00),
            HsvColor::from_argb(0x00FF00)
        );
    }

    #[test]
    fn primaries_and_secondaries() {
        #[rustfmt::skip]
        const TESTS: &[(u32, Component, Component, Component)] = &[
            (0xFF0000,   0.0, 1.0, 1.0),
            (0xFFFF00,  60.0, 1.0, 1.0),
            (0x00FF00, 120.0, 1.0, 1.0),
            (0x00FFFF, 180.0, 1.0, 1.0),
            (0x0000FF, 240.0, 1.0, 1.0),
            (0xFF00FF, 300.0, 1.0, 1.0),
            (0xD2691E,  25.0, 0.857143, 0.823529),
        ];

        for &(argb, hue, saturation, value) in TESTS {
            let c = HsvColor::from_argb(argb);
            assert_component_eq!(c.hue(), hue, epsilon = 0.02);
            assert_component_eq!(c.saturation(), saturation, epsilon = 1.0e-5);
            assert_component_eq!(c.value(), value, epsilon = 1.0e-5);
            assert_eq!(c.to_argb(), 0xFF00_0000 | argb);
        }
    }

    #[test]
    fn greys_collapse_to_zero_hue() {
        for grey in [0.0, 0.25, 0.5, 1.0] {
            let c = HsvColor::from_rgb(grey, grey, grey);
            assert_eq!(c.hue(), 0.0);
            assert_eq!(c.saturation(), 0.0);
            assert_component_eq!(c.value(), grey);
        }

        // The hue of a grey is lost on the way through RGB.
        let grey = HsvColor::new(200.0, 0.0, 0.5);
        let Components(r, g, b) = grey.to_rgb();
        assert_eq!(HsvColor::from_rgb(r, g, b), HsvColor::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn hsv_rgb_round_trip_keeps_saturation_and_value() {
        for &(hue, saturation, value) in &[
            (15.0, 0.8, 0.9),
            (75.5, 0.3, 0.4),
            (200.25, 1.0, 0.5),
            (300.0, 0.05, 1.0),
            (352.0, 0.5, 0.5),
        ] {
            let c = HsvColor::new(hue, saturation, value);
            let Components(r, g, b) = c.to_rgb();
            let back = HsvColor::from_rgb(r, g, b);
            assert_component_eq!(back.hue(), c.hue(), epsilon = 0.02);
            assert_component_eq!(back.saturation(), c.saturation(), epsilon = 2.0e-6);
            assert_component_eq!(back.value(), c.value(), epsilon = 2.0e-6);
        }
    }

    #[test]
    fn channel_accessors_match_to_rgb() {
        let c = HsvColor::new(25.0, 0.857143, 0.823529);
        let Components(r, g, b) = c.to_rgb();
        assert_eq!(c.red(), r);
        assert_eq!(c.green(), g);
        assert_eq!(c.blue(), b);
        assert_component_eq!(r, 0.823529);
        assert_component_eq!(g, 0.411765);
        assert_component_eq!(b, 0.117647);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(HsvColor::new(0.0, 1.0, 1.0).to_hex(), "#FF0000");
        assert_eq!(HsvColor::from_argb(0xD2691E).to_string(), "#D2691E");
        assert_eq!(HsvColor::default().to_hex(), "#000000");
        assert_eq!(HsvColor::new(0.0, 0.0, 1.0).to_hex(), "#FFFFFF");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!("d2691e".parse::<HsvColor>(), Ok(HsvColor::from_argb(0xD2691E)));
        assert_eq!(" #0F0 ".parse::<HsvColor>(), Ok(HsvColor::from_argb(0x00FF00)));
        assert_eq!("#abc".parse::<HsvColor>(), Ok(HsvColor::from_argb(0xAABBCC)));
    }

    #[test]
    fn hex_parsing_errors() {
        assert_eq!("".parse::<HsvColor>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<HsvColor>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#FF00".parse::<HsvColor>(), Err(ParseColorError::InvalidLength(4)));
        assert_eq!(
            "#FF00FF00".parse::<HsvColor>(),
            Err(ParseColorError::InvalidLength(8))
        );
        assert_eq!(
            "#GG0000".parse::<HsvColor>(),
            Err(ParseColorError::InvalidCharacter('G'))
        );
        assert_eq!(
            "+FF000".parse::<HsvColor>(),
            Err(ParseColorError::InvalidCharacter('+'))
        );
    }

    #[test]
    fn dark_colors_contrast_with_white() {
        assert!(HsvColor::default().is_dark());
        assert!(HsvColor::new(240.0, 1.0, 1.0).is_dark());
        assert!(!HsvColor::new(60.0, 1.0, 1.0).is_dark());
        assert!(!HsvColor::new(0.0, 0.0, 1.0).is_dark());

        assert_eq!(HsvColor::default().contrasting(), HsvColor::new(0.0, 0.0, 1.0));
        assert_eq!(HsvColor::new(60.0, 1.0, 1.0).contrasting(), HsvColor::default());
    }
}
