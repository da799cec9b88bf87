//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module.
//!
//! CIELAB here is always relative to D65, the white point of sRGB, so no chromatic adaptation is
//! ever needed on the way to or from the display.

use color::{ByteColor, Color, XYZColor};
use colors::LinearRGBColor;
use consts::LAB_DELTA;
use coord::Coord;
use hex::{self, HexParseError};
use illuminants::D65;

/// The CIELAB nonlinearity: a cube root, with a linear segment near zero so the slope stays finite.
pub fn lab_function(t: f64) -> f64 {
    if t > LAB_DELTA.powi(3) {
        t.powf(1.0 / 3.0)
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

/// The inverse of [`lab_function`]. The branch point moves from delta cubed to delta, which is where
/// the forward function sends it.
pub fn inverse_lab_function(t: f64) -> f64 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white: it is perhaps possible to have a higher
    /// value for reflective surfaces.
    pub l: f64,
    /// The first opponent color axis. By convention, this is usually between -128 and 127, with -128
    /// being fully green and 127 being fully magenta, but note that it is still possible to create
    /// "imaginary" colors (ones that cannot normally be seen by the human eye). Additionally,
    /// depending on the other two dimensions, many colors with a value in this range will still not
    /// be in the sRGB gamut.
    pub a: f64,
    /// The second opponent color axis. This is, like `a`, between -128 and 127 by convention for most
    /// visible colors. -128 is fully blue; 127 is fully yellow.
    pub b: f64,
}

impl Color for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB, normalizing by the D65 white point.
    fn from_xyz(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let fx = lab_function(xyz.x / D65.x);
        let fy = lab_function(xyz.y / D65.y);
        let fz = lab_function(xyz.z / D65.z);

        // the nonlinearity above models human vision, so this is just simple linear formulae
        // note how a and b are opponent color axes
        CIELABColor {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
    /// Returns the XYZ color that corresponds to the CIELAB color, undoing the D65 normalization.
    fn to_xyz(&self) -> XYZColor {
        let fy = (self.l + 16.0) / 116.0;
        XYZColor {
            x: D65.x * inverse_lab_function(fy + self.a / 500.0),
            y: D65.y * inverse_lab_function(fy),
            z: D65.z * inverse_lab_function(fy - self.b / 200.0),
        }
    }
}

impl CIELABColor {
    /// Converts a displayable color to CIELAB. This never fails.
    pub fn from_bytes(bytes: ByteColor) -> CIELABColor {
        bytes.to_rgb().to_linear().convert()
    }
    /// Parses `#rrggbb` notation and converts to CIELAB.
    /// # Example
    /// ```
    /// # use labsat::colors::CIELABColor;
    /// let red = CIELABColor::from_hex("#ff0000").unwrap();
    /// assert!((red.l - 53.23).abs() <= 0.01);
    /// assert!((red.a - 80.11).abs() <= 0.01);
    /// assert!((red.b - 67.22).abs() <= 0.01);
    /// ```
    pub fn from_hex(hex: &str) -> Result<CIELABColor, HexParseError> {
        Ok(CIELABColor::from_bytes(hex.parse()?))
    }
    /// Converts to linear RGB, with no gamut check: this is what contrast gets measured on.
    pub fn to_linear_rgb(&self) -> LinearRGBColor {
        LinearRGBColor::from_xyz(self.to_xyz())
    }
    /// Converts to bytes, or `None` if the color is outside of the sRGB gamut.
    pub fn to_bytes(&self) -> Option<ByteColor> {
        self.to_linear_rgb().to_srgb().to_bytes()
    }
    /// Converts to `#rrggbb` notation, or to `transparent` if the color is outside of the sRGB
    /// gamut.
    /// # Example
    /// ```
    /// # use labsat::colors::CIELABColor;
    /// let gray = CIELABColor{l: 50., a: 0., b: 0.};
    /// assert_eq!(gray.to_hex(), "#777777");
    /// let impossible = CIELABColor{l: 50., a: 200., b: 0.};
    /// assert_eq!(impossible.to_hex(), "transparent");
    /// ```
    pub fn to_hex(&self) -> String {
        hex::to_hex(self.to_bytes())
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(val: CIELABColor) -> Self {
        Coord {
            x: val.l,
            y: val.a,
            z: val.b,
        }
    }
}
