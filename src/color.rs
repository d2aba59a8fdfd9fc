//! An [`HsvColor`] is a color in the HSV notation, stored as a single packed
//! integer.

use std::fmt;

use bitflags::bitflags;

use crate::math::{clamp_unit, normalize_hue};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe a color, in the order of the
/// notation they are used with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Selects which of the hue, saturation and value fields of an
    /// [`HsvColor`] an operation touches.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Channels : u8 {
        /// The hue field.
        const HUE = 1 << 0;
        /// The saturation field.
        const SATURATION = 1 << 1;
        /// The value field.
        const VALUE = 1 << 2;
    }
}

/// Wrap a hue into `[0, 360)` in a way that survives quantization: a hue so
/// close to 360 that its scaled product reaches 36000 is stored as 0.
fn wrap_hue(hue: Component) -> Component {
    let hue = normalize_hue(hue);
    if hue * HsvColor::HUE_SCALE >= 360.0 * HsvColor::HUE_SCALE {
        0.0
    } else {
        hue
    }
}

pipette_macros::gen_packed! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    ///
    /// The three fields are truncated into one `u64`. Hue keeps 2 decimal
    /// digits in bits 40 to 55; saturation and value keep 6 decimal digits in
    /// bits 20 to 39 and 0 to 19. Two colors are equal when their packed
    /// values are equal.
    ///
    /// Constructors never fail. A hue outside `[0, 360)` is wrapped and a
    /// saturation or value outside `[0, 1]` is clamped; NaN is stored as 0.
    pub struct HsvColor {
        /// The hue of the color, in degrees within `[0, 360)`.
        #[packed(shift = 40, bits = 16, scale = 100, normalize = wrap_hue)]
        hue: Component,
        /// The saturation of the color, within `[0, 1]`.
        #[packed(shift = 20, bits = 20, scale = 1_000_000, normalize = clamp_unit)]
        saturation: Component,
        /// The value (brightness) of the color, within `[0, 1]`.
        #[packed(shift = 0, bits = 20, scale = 1_000_000, normalize = clamp_unit)]
        value: Component,
    }
}

impl HsvColor {
    /// Create a color from hue, saturation and value components.
    pub fn from_components(components: Components) -> Self {
        let Components(hue, saturation, value) = components;
        Self::new(hue, saturation, value)
    }

    /// Return the hue, saturation and value of this color.
    pub fn to_components(&self) -> Components {
        Components(self.hue(), self.saturation(), self.value())
    }

    /// Replace the fields selected by `channels` with the matching entries in
    /// `components`. Fields that are not selected keep their stored bits.
    pub fn merge(self, components: Components, channels: Channels) -> Self {
        let Components(hue, saturation, value) = components;

        let mut color = self;
        if channels.contains(Channels::HUE) {
            color = color.with_hue(hue);
        }
        if channels.contains(Channels::SATURATION) {
            color = color.with_saturation(saturation);
        }
        if channels.contains(Channels::VALUE) {
            color = color.with_value(value);
        }
        color
    }

    /// The packed representation as a signed integer, suitable for storing
    /// the color wherever only signed 64-bit scalars are supported.
    pub const fn to_i64(&self) -> i64 {
        self.packed() as i64
    }

    /// Restore a color stored with [`HsvColor::to_i64`].
    pub const fn from_i64(packed: i64) -> Self {
        Self::from_packed(packed as u64)
    }
}

impl fmt::Debug for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HsvColor")
            .field("hue", &self.hue())
            .field("saturation", &self.saturation())
            .field("value", &self.value())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HsvColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_i64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HsvColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <i64 as serde::Deserialize>::deserialize(deserializer).map(Self::from_i64)
    }
}
