//! This module implements linear RGB: the sRGB primaries without the sRGB transfer curve. Linear
//! values are proportional to the light a display emits, which makes this the space for anything
//! physical, like luminance and contrast, and the space that connects to CIE XYZ by a plain matrix.
//!
//! The transfer curve is the one from the W3C's sRGB proposal: linear near black, then a 2.4 power
//! law. Neither direction clamps, so an out-of-gamut color survives the trip to sRGB and back and is
//! only rejected when it is finally quantized to bytes.

use color::{Color, RGBColor, XYZColor};
use consts::{SRGB_DECODE_CUTOFF, SRGB_ENCODE_CUTOFF, STANDARD_RGB_TO_XYZ, STANDARD_XYZ_TO_RGB};
use consts::transform;
use coord::Coord;

/// Decodes one gamma-encoded sRGB channel to linear light.
pub fn srgb_channel_to_linear(channel: f64) -> f64 {
    if channel <= SRGB_DECODE_CUTOFF {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear channel with the sRGB transfer curve. Negative values take the linear branch,
/// so this never produces NaN for a real input.
pub fn linear_channel_to_srgb(channel: f64) -> f64 {
    if channel <= SRGB_ENCODE_CUTOFF {
        12.92 * channel
    } else {
        1.055 * channel.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in linear RGB with sRGB primaries and a D65 white point. `(1, 1, 1)` is white and
/// `(0, 0, 0)` is black: colors outside that cube are out of gamut but still meaningful.
/// # Example
///
/// ```
/// # use labsat::prelude::*;
/// # use labsat::colors::LinearRGBColor;
/// // 60% gray in sRGB emits only about a third of the light
/// let gray = RGBColor{r: 0.6, g: 0.6, b: 0.6}.to_linear();
/// assert!((gray.r - 0.319).abs() <= 0.001);
/// assert_eq!(gray.to_srgb().to_bytes(), Some(ByteColor{r: 153, g: 153, b: 153}));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRGBColor {
    /// The red channel, in linear light.
    pub r: f64,
    /// The green channel, in linear light.
    pub g: f64,
    /// The blue channel, in linear light.
    pub b: f64,
}

impl LinearRGBColor {
    /// Applies the sRGB transfer curve.
    pub fn to_srgb(&self) -> RGBColor {
        Coord::from(*self).map(linear_channel_to_srgb).into()
    }
}

impl Color for LinearRGBColor {
    fn from_xyz(xyz: XYZColor) -> LinearRGBColor {
        transform(&STANDARD_XYZ_TO_RGB, xyz.into()).into()
    }
    fn to_xyz(&self) -> XYZColor {
        transform(&STANDARD_RGB_TO_XYZ, (*self).into()).into()
    }
}

impl From<Coord> for LinearRGBColor {
    fn from(c: Coord) -> LinearRGBColor {
        LinearRGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<LinearRGBColor> for Coord {
    fn from(val: LinearRGBColor) -> Self {
        Coord {
            x: val.r,
            y: val.g,
            z: val.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;

    #[test]
    fn test_srgb_linear_round_trip() {
        for i in 0..=100 {
            let c = f64::from(i) / 100.;
            let srgb = RGBColor{r: c, g: 1. - c, b: c * c};
            let srgb2 = srgb.to_linear().to_srgb();
            assert!((srgb.r - srgb2.r).abs() <= TEST_PRECISION);
            assert!((srgb.g - srgb2.g).abs() <= TEST_PRECISION);
            assert!((srgb.b - srgb2.b).abs() <= TEST_PRECISION);
        }
    }

    #[test]
    fn test_transfer_curve_endpoints() {
        assert_eq!(srgb_channel_to_linear(0.), 0.);
        assert!((srgb_channel_to_linear(1.) - 1.).abs() <= 1e-12);
        assert_eq!(linear_channel_to_srgb(0.), 0.);
        assert!((linear_channel_to_srgb(1.) - 1.).abs() <= 1e-12);
        // the linear segment, on both sides of zero
        assert!((srgb_channel_to_linear(0.02) - 0.02 / 12.92).abs() <= 1e-15);
        assert!((linear_channel_to_srgb(-0.1) + 1.292).abs() <= 1e-12);
    }

    #[test]
    fn test_channels_are_independent() {
        let a = RGBColor{r: 0.3, g: 0.6, b: 0.9}.to_linear();
        let b = RGBColor{r: 0.3, g: 0.1, b: 0.0}.to_linear();
        assert_eq!(a.r, b.r);
    }

    #[test]
    fn test_linear_xyz_conversion() {
        let white = LinearRGBColor{r: 1., g: 1., b: 1.};
        let xyz = white.to_xyz();
        assert!((xyz.y - 1.).abs() <= 1e-10);
        let primaries = [
            LinearRGBColor{r: 1., g: 0., b: 0.},
            LinearRGBColor{r: 0., g: 1., b: 0.},
            LinearRGBColor{r: 0., g: 0., b: 1.},
            LinearRGBColor{r: 0.2, g: 0.4, b: 0.6},
        ];
        for rgb in primaries.iter() {
            let rgb2 = LinearRGBColor::from_xyz(rgb.to_xyz());
            assert!((rgb.r - rgb2.r).abs() <= 1e-3);
            assert!((rgb.g - rgb2.g).abs() <= 1e-3);
            assert!((rgb.b - rgb2.b).abs() <= 1e-3);
        }
    }
}
