//! This module contains the color spaces that sit between sRGB and the outside world: linear RGB,
//! which is sRGB with the transfer curve removed, and CIELAB, the perceptual space the saturation
//! search works in. For convenience, each type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cielabcolor;
pub mod linearrgbcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::linearrgbcolor::LinearRGBColor;
