//! This file provides the constants used for matrix multiplication and color space conversion, along
//! with the helper that applies them. The two sRGB matrices are the published four-decimal values:
//! they are inverses of each other only to about four decimal places, which is well below what an
//! 8-bit channel can resolve, and matching the published values is what every other tool does.

use coord::Coord;
use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

/// The cutoff below which an sRGB-encoded channel decodes linearly. This is the value from the
/// original sRGB proposal rather than IEC 61966-2-1's 0.04045: the two agree on every 8-bit value.
pub const SRGB_DECODE_CUTOFF: f64 = 0.03928;
/// The cutoff below which a linear channel encodes linearly.
pub const SRGB_ENCODE_CUTOFF: f64 = 0.00304;

/// The junction of the two pieces of the CIELAB nonlinearity, 6/29.
pub const LAB_DELTA: f64 = 6.0 / 29.0;

#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-6;

lazy_static! {
    /// Linear sRGB to CIE XYZ, D65.
    pub static ref STANDARD_RGB_TO_XYZ: Matrix<f64> = Matrix::new(3, 3, vec![
        0.4124, 0.3576, 0.1805,
        0.2126, 0.7152, 0.0722,
        0.0193, 0.1192, 0.9505,
    ]);
    /// CIE XYZ, D65 to linear sRGB.
    pub static ref STANDARD_XYZ_TO_RGB: Matrix<f64> = Matrix::new(3, 3, vec![
        03.2406, -1.5372, -0.4986,
        -0.9689, 01.8758, 00.0415,
        00.0557, -0.2040, 01.0570,
    ]);
}

/// Multiplies the point, as a column vector, by the given 3x3 matrix.
pub fn transform(m: &Matrix<f64>, c: Coord) -> Coord {
    let v: Vector<f64> = m * Vector::from(c);
    Coord {
        x: v[0],
        y: v[1],
        z: v[2],
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_matrices_nearly_inverse() {
        let identity = &*STANDARD_XYZ_TO_RGB * &*STANDARD_RGB_TO_XYZ;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1. } else { 0. };
                assert!((identity[[i, j]] - expected).abs() <= 1e-3);
            }
        }
    }

    #[test]
    fn test_transform_white() {
        // (1, 1, 1) in linear RGB is the D65 white point, up to the matrix's precision
        let white = transform(&STANDARD_RGB_TO_XYZ, Coord{x: 1., y: 1., z: 1.});
        assert!((white.x - 0.9505).abs() <= 1e-10);
        assert!((white.y - 1.0).abs() <= 1e-10);
        assert!((white.z - 1.089).abs() <= 1e-10);
    }
}
