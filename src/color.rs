//! This file defines the [`Color`] trait, the hub that every floating-point color space converts
//! through, along with the three representations closest to the hardware: [`XYZColor`], the hub
//! itself; [`RGBColor`], gamma-encoded sRGB as floating point; and [`ByteColor`], sRGB as the three
//! bytes a display actually receives.
//!
//! Getting from an `RGBColor` to a `ByteColor` is the one conversion in Labsat that can fail: if any
//! channel rounds to something outside 0-255, the color isn't displayable and the result is `None`.
//! Nothing is ever clamped, because a clamped color is a different color with a different contrast.

use std::fmt;
use std::str::FromStr;

use colors::LinearRGBColor;
use colors::linearrgbcolor::srgb_channel_to_linear;
use coord::Coord;
use hex::{self, HexParseError};

/// The absolute tolerance, per XYZ component, used by [`Color::approx_equal`].
pub const APPROX_EPSILON: f64 = 1e-6;

/// A point in the CIE 1931 XYZ color space, relative to D65 and normalized so that the white point
/// has a Y of 1. This is the hub of every conversion: nothing here is bounded, and negative values
/// are perfectly good intermediate data.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis: a mix of the three cone responses chosen to be nonnegative.
    pub x: f64,
    /// The Y axis: luminance.
    pub y: f64,
    /// The Z axis: roughly, the short-wavelength (blue) cone response.
    pub z: f64,
}

/// A trait that includes any color representation that can be converted to and from the CIE 1931
/// XYZ color space. Implementing the two required methods gives conversion to every other color in
/// Labsat for free.
/// # Example
///
/// ```
/// # use labsat::prelude::*;
/// # use labsat::colors::CIELABColor;
/// let red = RGBColor{r: 1., g: 0., b: 0.};
/// let red_lab: CIELABColor = red.convert();
/// assert!((red_lab.l - 53.23).abs() <= 0.01);
/// let back: RGBColor = red_lab.convert();
/// assert_eq!(back.to_bytes(), Some(ByteColor{r: 255, g: 0, b: 0}));
/// ```
pub trait Color: Sized {
    /// Converts from an XYZ color.
    fn from_xyz(xyz: XYZColor) -> Self;
    /// Converts to an XYZ color.
    fn to_xyz(&self) -> XYZColor;
    /// Converts to any other `Color`, going through XYZ.
    fn convert<T: Color>(&self) -> T {
        T::from_xyz(self.to_xyz())
    }
    /// Returns `true` if the two colors are the same point in XYZ, up to [`APPROX_EPSILON`] in
    /// each component. The colors don't need to share a type.
    fn approx_equal<T: Color>(&self, other: &T) -> bool {
        let c1: Coord = self.to_xyz().into();
        let c2: Coord = other.to_xyz().into();
        c1.approx_equal(&c2, APPROX_EPSILON)
    }
}

impl Color for XYZColor {
    fn from_xyz(xyz: XYZColor) -> XYZColor {
        xyz
    }
    fn to_xyz(&self) -> XYZColor {
        *self
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(val: XYZColor) -> Self {
        Coord {
            x: val.x,
            y: val.y,
            z: val.z,
        }
    }
}

/// Converts one byte channel to a gamma-encoded channel between 0 and 1.
pub fn byte_channel_to_srgb(channel: u8) -> f64 {
    f64::from(channel) / 255.0
}

/// Converts one gamma-encoded channel to the nearest byte, or `None` if that byte would fall outside
/// 0-255. Halves round up, toward positive infinity, so -0.5 is byte 0 and 255.5 is out of range.
/// NaN is never a valid byte either.
/// # Example
/// ```
/// # use labsat::color::srgb_channel_to_byte;
/// assert_eq!(srgb_channel_to_byte(0.5), Some(128));
/// assert_eq!(srgb_channel_to_byte(1.0019), Some(255));
/// assert_eq!(srgb_channel_to_byte(1.003), None);
/// assert_eq!(srgb_channel_to_byte(-0.01), None);
/// ```
pub fn srgb_channel_to_byte(channel: f64) -> Option<u8> {
    let byte = (channel * 255.0 + 0.5).floor();
    if byte >= 0.0 && byte <= 255.0 {
        Some(byte as u8)
    } else {
        None
    }
}

/// A color in the sRGB color space, gamma-encoded, with each channel as a floating point number that
/// is between 0 and 1 for displayable colors. Values outside that range are allowed: they are what
/// happens when a CIELAB color outside of the sRGB gamut is converted, and it is up to
/// [`to_bytes`](#method.to_bytes) to reject them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: f64,
    /// The green channel.
    pub g: f64,
    /// The blue channel.
    pub b: f64,
}

impl RGBColor {
    /// Removes the sRGB transfer curve, giving light-linear values.
    pub fn to_linear(&self) -> LinearRGBColor {
        Coord::from(*self).map(srgb_channel_to_linear).into()
    }
    /// Quantizes to bytes, rounding each channel to the nearest integer. Returns `None` if any
    /// channel rounds outside 0-255: the color can't be displayed, and there is no partial result.
    /// # Example
    /// ```
    /// # use labsat::prelude::*;
    /// let orange = RGBColor{r: 1.0, g: 0.5, b: 0.0};
    /// assert_eq!(orange.to_bytes(), Some(ByteColor{r: 255, g: 128, b: 0}));
    /// let too_bright = RGBColor{r: 1.01, g: 0.5, b: 0.0};
    /// assert_eq!(too_bright.to_bytes(), None);
    /// ```
    pub fn to_bytes(&self) -> Option<ByteColor> {
        Some(ByteColor {
            r: srgb_channel_to_byte(self.r)?,
            g: srgb_channel_to_byte(self.g)?,
            b: srgb_channel_to_byte(self.b)?,
        })
    }
}

impl Color for RGBColor {
    /// Converts to linear RGB with the standard sRGB matrix, then applies the transfer curve.
    fn from_xyz(xyz: XYZColor) -> RGBColor {
        LinearRGBColor::from_xyz(xyz).to_srgb()
    }
    fn to_xyz(&self) -> XYZColor {
        self.to_linear().to_xyz()
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(val: RGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

/// An sRGB color as three bytes, the form a display or a stylesheet wants. This is the terminal
/// representation of Labsat: everything else is floating point. The absence of a color (what CSS
/// calls `transparent`) is `Option<ByteColor>::None`, and [`hex::to_hex`] knows how to print it.
///
/// `ByteColor` parses from and prints to `#rrggbb` notation.
/// # Example
/// ```
/// # use labsat::prelude::*;
/// let teal: ByteColor = "#008080".parse().unwrap();
/// assert_eq!(teal, ByteColor{r: 0, g: 128, b: 128});
/// assert_eq!(teal.to_string(), "#008080");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl ByteColor {
    /// Scales each channel to lie between 0 and 1. This never fails.
    pub fn to_rgb(&self) -> RGBColor {
        RGBColor {
            r: byte_channel_to_srgb(self.r),
            g: byte_channel_to_srgb(self.g),
            b: byte_channel_to_srgb(self.b),
        }
    }
}

impl From<(u8, u8, u8)> for ByteColor {
    fn from(rgb: (u8, u8, u8)) -> ByteColor {
        let (r, g, b) = rgb;
        ByteColor { r, g, b }
    }
}

impl From<ByteColor> for RGBColor {
    fn from(bytes: ByteColor) -> RGBColor {
        bytes.to_rgb()
    }
}

impl fmt::Display for ByteColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#{}{}{}",
            hex::byte_to_hex(self.r),
            hex::byte_to_hex(self.g),
            hex::byte_to_hex(self.b)
        )
    }
}

impl FromStr for ByteColor {
    type Err = HexParseError;

    /// Parses `#rrggbb` notation, with either case of hex digit. `"transparent"` is not a
    /// `ByteColor`: use [`hex::parse_hex`] to accept it.
    fn from_str(s: &str) -> Result<ByteColor, HexParseError> {
        hex::parse_hex(s)?.ok_or(HexParseError::Transparent)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;

    #[test]
    fn test_byte_round_trip() {
        for r in 0..=255u8 {
            let color = ByteColor{r, g: 255 - r, b: r / 3};
            assert_eq!(color.to_rgb().to_bytes(), Some(color));
        }
    }

    #[test]
    fn test_out_of_range_bytes() {
        // anything rounding to 256 or -1 fails, anything rounding into range doesn't
        assert_eq!(srgb_channel_to_byte(255.4 / 255.), Some(255));
        assert_eq!(srgb_channel_to_byte(255.6 / 255.), None);
        assert_eq!(srgb_channel_to_byte(-0.4 / 255.), Some(0));
        assert_eq!(srgb_channel_to_byte(-0.6 / 255.), None);
        assert_eq!(srgb_channel_to_byte(f64::NAN), None);
    }

    #[test]
    fn test_half_rounds_up() {
        assert_eq!(srgb_channel_to_byte(-0.5 / 255.), Some(0));
        assert_eq!(srgb_channel_to_byte(254.5 / 255.), Some(255));
        assert_eq!(srgb_channel_to_byte(255.5 / 255.), None);
        assert_eq!(srgb_channel_to_byte(127.5 / 255.), Some(128));
        let barely_black = RGBColor{r: -0.5 / 255., g: 0., b: 1.};
        assert_eq!(barely_black.to_bytes(), Some(ByteColor{r: 0, g: 0, b: 255}));
    }

    #[test]
    fn test_bad_channel_spoils_color() {
        // one bad channel spoils the whole color
        let color = RGBColor{r: 0.5, g: 0.5, b: -0.2};
        assert_eq!(color.to_bytes(), None);
    }

    #[test]
    fn test_byte_tuple_conversion() {
        let color = ByteColor::from((255, 0, 0));
        assert_eq!(color, ByteColor{r: 255, g: 0, b: 0});
        let rgb: RGBColor = color.into();
        assert_eq!(rgb, RGBColor{r: 1., g: 0., b: 0.});
    }

    #[test]
    fn test_rgb_xyz_conversion() {
        let rgb = RGBColor{r: 0.2, g: 0.6, b: 0.8};
        let xyz = rgb.to_xyz();
        let rgb2 = RGBColor::from_xyz(xyz);
        // the published matrices are only inverses to about four decimal places
        assert!((rgb.r - rgb2.r).abs() <= 1e-3);
        assert!((rgb.g - rgb2.g).abs() <= 1e-3);
        assert!((rgb.b - rgb2.b).abs() <= 1e-3);
        assert_eq!(rgb.to_bytes(), rgb2.to_bytes());
    }

    #[test]
    fn test_xyz_identity() {
        let xyz = XYZColor{x: 0.3, y: 0.2, z: 0.9};
        let same: XYZColor = xyz.convert();
        assert_eq!(xyz, same);
        assert!(xyz.approx_equal(&XYZColor{x: 0.3 + TEST_PRECISION / 10., y: 0.2, z: 0.9}));
        assert!(!xyz.approx_equal(&XYZColor{x: 0.31, y: 0.2, z: 0.9}));
    }
}
