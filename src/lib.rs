//! pipette provides the color model and pointer geometry behind HSV color
//! pickers: a disc picking hue and saturation, a ring picking hue and a
//! rectangle picking saturation and value.
//!
//! Drawing the pickers and recognizing gestures is left to the UI toolkit.
//! The toolkit reports pointer positions to a [`layout::Layout`] and gets
//! back an [`HsvColor`].

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
pub mod gesture;
pub mod layout;
mod math;

pub use color::{Channels, Component, Components, HsvColor};
pub use error::ParseColorError;
pub use math::{Point, Size, Vector};
