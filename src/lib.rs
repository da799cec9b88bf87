//! Labsat finds, for a given foreground color and WCAG contrast target, the most saturated color
//! along a hue direction in CIELAB that still meets the target and can still be shown on an
//! ordinary 8-bit sRGB display. Getting there takes an exact conversion pipeline between the five
//! usual representations of a color: sRGB bytes, sRGB as floating point, linear RGB, CIE XYZ, and
//! CIELAB. Each step is a small, pure function: callers compose the ones they need, or use the
//! [`Color`](color/trait.Color.html) trait to convert between any two floating-point spaces.
//!
//! The search itself lives in [`saturate`](saturate/index.html). Failure is never exceptional here:
//! a color that doesn't fit in 8-bit sRGB, or a hue direction with no color meeting the target, is
//! simply `None`.
//!
//! # Example
//! ```
//! # use labsat::prelude::*;
//! # use labsat::colors::LinearRGBColor;
//! # use labsat::saturate::saturate;
//! let black = LinearRGBColor { r: 0., g: 0., b: 0. };
//! // the reddest L* = 60 color that is still readable with black text at WCAG AA
//! let red = saturate(1.0, 1.0, 60.0, 0.0, &black, 4.5, 0.0).unwrap();
//! // pushed all the way to the edge of the sRGB gamut
//! assert_eq!(red.r, 255);
//! ```

#![doc(html_root_url = "https://docs.rs/labsat/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

#[macro_use]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
extern crate num;
extern crate regex;
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

#[cfg(test)]
extern crate serde_json;

pub mod color;
pub mod colors;
mod consts;
pub mod contrast;
pub mod coord;
pub mod hex;
pub mod illuminants;
pub mod prelude;
pub mod saturate;
