//! This module simply brings the most common Labsat functionality under a single namespace, to
//! prevent excessive imports. As of now, this prelude includes the [`Color`] trait, the two sRGB
//! representations [`RGBColor`] and [`ByteColor`], the hex parse error [`HexParseError`], and nothing
//! else. Of particular note is that the color spaces found in the [`colors`] module are not included.
//!
//! [`colors`]: ../colors/index.html

pub use color::{ByteColor, Color, RGBColor};
pub use hex::HexParseError;
