//! This module provides the one illuminant Labsat works in: CIE standard illuminant D65, the white
//! point of sRGB. Every CIELAB conversion is relative to it. It is a constant rather than a
//! parameter, because the whole pipeline assumes sRGB primaries, and those only make sense with
//! their own white point.

use color::XYZColor;

/// The XYZ coordinates of the D65 white point, normalized so that the Y (luminance) value is 1.
pub const D65: XYZColor = XYZColor {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::Color;
    use colors::CIELABColor;

    #[test]
    fn test_white_point_is_lab_white() {
        let white = CIELABColor::from_xyz(D65);
        assert!((white.l - 100.).abs() <= 1e-10);
        assert!(white.a.abs() <= 1e-10);
        assert!(white.b.abs() <= 1e-10);
    }
}
