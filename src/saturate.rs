//! This module finds the most saturated color along a hue direction that still contrasts enough with
//! a given foreground color, and that can still be shown on an 8-bit sRGB display.
//!
//! The direction is a ray in the CIELAB a\*-b\* plane, starting at the gray of a given lightness.
//! The a\* axis can be squeezed by a scale factor, since the sRGB gamut reaches much further along
//! a\* than along b\* for most hues, and lightness can drift along with a\* by a fixed slope, to
//! compensate for colors that look lighter or darker than their L\* as they gain chroma. Positions
//! on the ray are given by a dimensionless chroma parameter `t`: `t = 0` is the gray, and every unit
//! of `t` moves 256 units through the (scaled) a\*-b\* plane.
//!
//! The search is a bisection on `t`. It assumes that once a point on the ray fails, either by not
//! contrasting enough or by leaving the gamut, every point further out fails too. That holds for the
//! lightness and slope ranges that are useful in practice, but it isn't guaranteed in general: if it
//! doesn't hold, the result still meets both constraints but may not be the most saturated color
//! that does.
//!
//! # Example
//! ```
//! # use labsat::colors::LinearRGBColor;
//! # use labsat::saturate::SaturationSearch;
//! let white = LinearRGBColor{r: 1., g: 1., b: 1.};
//! let search = SaturationSearch {
//!     lightness: 45.,
//!     angle: std::f64::consts::PI,
//!     ..SaturationSearch::default()
//! };
//! let outcome = search.run(&white);
//! let green = outcome.best.unwrap();
//! // dark enough for white text, with all the green sRGB has to give at that lightness
//! assert!(green.color.g > green.color.r);
//! assert!(green.chroma > 0.1);
//! ```

use color::ByteColor;
use colors::{CIELABColor, LinearRGBColor};
use contrast::contrast_ratio;
use coord::Coord;

/// The search stops once the bracket around `t` is narrower than this.
pub const CHROMA_TOLERANCE: f64 = 1e-4;

/// How far, in CIELAB units, one unit of the chroma parameter moves along the ray.
pub const CHROMA_SCALE: f64 = 256.0;

/// The parameters of a saturation search. Every field has a default, so a search can be described
/// in a configuration file by only the fields that matter:
///
/// ```
/// # extern crate labsat;
/// # extern crate serde_json;
/// # use labsat::saturate::SaturationSearch;
/// # fn main() {
/// let search: SaturationSearch = serde_json::from_str(r#"{"lightness": 70, "contrast": 7}"#).unwrap();
/// assert_eq!(search.lightness, 70.);
/// assert_eq!(search.high, 1.);
/// # }
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaturationSearch {
    /// The initial upper bound on the chroma parameter. It doesn't have to be in gamut.
    pub high: f64,
    /// Divides the a\* component of the ray. Values above 1 favor b\*.
    pub a_scale: f64,
    /// The L\* of the gray the ray starts from.
    pub lightness: f64,
    /// How much L\* changes per unit of a\* along the ray.
    pub slope: f64,
    /// The minimum contrast ratio against the foreground.
    pub contrast: f64,
    /// The hue direction, in radians counterclockwise from +a\*.
    pub angle: f64,
}

impl Default for SaturationSearch {
    /// A unit-range search from L\* = 50 along +a\*, targeting WCAG AA for normal text.
    fn default() -> SaturationSearch {
        SaturationSearch {
            high: 1.0,
            a_scale: 1.0,
            lightness: 50.0,
            slope: 0.0,
            contrast: 4.5,
            angle: 0.0,
        }
    }
}

/// A successful search result: the byte color found, and the chroma parameter that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saturated {
    /// The color, as it would be displayed.
    pub color: ByteColor,
    /// The value of `t` the color came from.
    pub chroma: f64,
}

/// Everything a search run found out.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The most saturated acceptable color, or `None` if no point that was tried was acceptable.
    pub best: Option<Saturated>,
    /// How many points along the ray were tried.
    pub evaluations: usize,
}

impl SaturationSearch {
    /// The CIELAB color at chroma parameter `t` along the ray.
    pub fn point(&self, t: f64) -> CIELABColor {
        let (sin, cos) = self.angle.sin_cos();
        let a = CHROMA_SCALE * cos / self.a_scale;
        let b = CHROMA_SCALE * sin;
        // lightness follows a, so it moves along the ray too
        let base = Coord{x: self.lightness, y: 0.0, z: 0.0};
        let direction = Coord{x: self.slope * a, y: a, z: b};
        CIELABColor::from(base + direction * t)
    }

    /// Returns the bytes of the color at `t` if it both contrasts enough with the foreground and is
    /// in gamut, or `None` otherwise. Contrast is measured before quantization.
    fn accept(&self, t: f64, foreground: &LinearRGBColor) -> Option<ByteColor> {
        let rgb = self.point(t).to_linear_rgb();
        let ratio = contrast_ratio(&rgb, foreground);
        if ratio < self.contrast {
            trace!(t, ratio, "not enough contrast");
            return None;
        }
        let bytes = rgb.to_srgb().to_bytes();
        if bytes.is_none() {
            trace!(t, ratio, "out of gamut");
        }
        bytes
    }

    /// Runs the bisection against the given foreground color. An infinite or NaN `high` has no
    /// midpoint to start from, so nothing is tried.
    pub fn run(&self, foreground: &LinearRGBColor) -> SearchOutcome {
        if !self.high.is_finite() {
            debug!(high = self.high, "chroma bound isn't finite, nothing to search");
            return SearchOutcome{best: None, evaluations: 0};
        }
        let mut low = 0.0;
        let mut high = self.high;
        let mut best = None;
        let mut evaluations = 0;

        while high - low > CHROMA_TOLERANCE {
            let mid = 0.5 * (low + high);
            evaluations += 1;
            match self.accept(mid, foreground) {
                Some(color) => {
                    low = mid;
                    best = Some(Saturated{color, chroma: mid});
                }
                None => high = mid,
            }
        }

        match best {
            Some(found) => debug!(
                chroma = found.chroma,
                color = %found.color,
                evaluations,
                "found saturated color"
            ),
            None => debug!(evaluations, "no color on the ray meets the contrast target"),
        }
        SearchOutcome{best, evaluations}
    }

    /// Runs the bisection and keeps only the color.
    pub fn saturate(&self, foreground: &LinearRGBColor) -> Option<ByteColor> {
        self.run(foreground).best.map(|found| found.color)
    }
}

/// Finds the most saturated color at chroma parameter `t` in `[0, high]` along the ray at `angle`
/// radians, starting from the gray of L\* = `lightness`, whose contrast ratio with `foreground` is
/// at least `contrast` and which fits in 8-bit sRGB. The a\* component of the ray is divided by
/// `a_scale`, and L\* changes by `slope` per unit of a\*. Returns `None` if no such color was found.
#[allow(clippy::too_many_arguments)]
pub fn saturate(
    high: f64,
    a_scale: f64,
    lightness: f64,
    slope: f64,
    foreground: &LinearRGBColor,
    contrast: f64,
    angle: f64,
) -> Option<ByteColor> {
    SaturationSearch {
        high,
        a_scale,
        lightness,
        slope,
        contrast,
        angle,
    }
    .saturate(foreground)
}
