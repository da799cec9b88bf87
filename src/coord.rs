//! This module contains a struct, [`Coord`](coord::Coord), that models a 3D coordinate space and
//! supports limited math in 3 dimensions with scalars and other coordinates. Every color type in
//! Labsat converts to and from a `Coord`, which is how the per-channel transforms and the search's
//! ray arithmetic share one implementation.

use std::ops::{Add, Mul, Sub};
use num;
use num::{Num, NumCast};
use rulinalg::vector::Vector;

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. Supports the handful of arithmetic operations on points that color math
/// needs. `Coord` has three axes, denoted `x`, `y`, and `z`, and the distinction between them is
/// completely conventional. Any color that converts to and from a `Coord` matches its components
/// with these axes in the order of the letters in its name: for example, `CIELABColor` maps to a
/// coordinate such that `l` is on the x-axis, `a` is on the y-axis, and `b` is on the z-axis.
///
/// # Examples
/// ```
/// # use labsat::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// // componentwise addition and subtraction
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// // scalar multiplication only works with the scalar on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

/// This is a perfect analogue to numbers: for any Coords c1, c2, and c3, c1 + c2 = c3 implies
/// c3 - c2 = c1 and c3 - c1 = c2, down to floating point error.
impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        // every Scalar we actually use is a primitive number, which always casts to f64
        let r: f64 = num::cast(rhs).unwrap_or(f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl From<Coord> for Vector<f64> {
    fn from(c: Coord) -> Vector<f64> {
        Vector::new(vec![c.x, c.y, c.z])
    }
}

impl Coord {
    /// Applies the same scalar function to each axis independently. This is how every per-channel
    /// transform (gamma encoding, byte scaling, the CIELAB nonlinearity) is lifted to whole colors.
    /// # Example
    /// ```
    /// # use labsat::coord::Coord;
    /// let point = Coord{x: 1., y: 4., z: 9.};
    /// assert_eq!(point.map(f64::sqrt), Coord{x: 1., y: 2., z: 3.});
    /// ```
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Coord {
        Coord {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. This is a poor stand-in for perceptual difference in
    /// any space but CIELAB, and only a rough one there: Labsat mostly uses it to check that a
    /// round trip came back to where it started.
    /// # Example
    /// ```
    /// # use labsat::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
    /// Returns `true` if every axis is within `epsilon` of the other point's.
    pub fn approx_equal(&self, other: &Coord, epsilon: f64) -> bool {
        approx_eq!(f64, self.x, other.x, epsilon = epsilon)
            && approx_eq!(f64, self.y, other.y, epsilon = epsilon)
            && approx_eq!(f64, self.z, other.z, epsilon = epsilon)
    }
}
