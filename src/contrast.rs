//! WCAG 2.0 relative luminance and contrast ratio. Both work on linear RGB, which is what the
//! [definition](https://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef) is written in
//! terms of: the gamma-encoded form has to be decoded first.

use colors::LinearRGBColor;

/// The relative luminance of a color: how much light it emits relative to white, on a scale where
/// black is 0 and white is 1. This is the Y row of the sRGB-to-XYZ matrix.
/// # Example
/// ```
/// # use labsat::colors::LinearRGBColor;
/// # use labsat::contrast::relative_luminance;
/// let white = LinearRGBColor{r: 1., g: 1., b: 1.};
/// assert!((relative_luminance(&white) - 1.0).abs() <= 1e-10);
/// ```
pub fn relative_luminance(color: &LinearRGBColor) -> f64 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}

/// The [contrast
/// ratio](https://www.w3.org/TR/UNDERSTANDING-WCAG20/visual-audio-contrast-contrast.html#contrast-ratiodef)
/// between two colors, from 1 (no contrast) to 21 (black on white). The order of the two colors
/// doesn't matter.
pub fn contrast_ratio(color1: &LinearRGBColor, color2: &LinearRGBColor) -> f64 {
    let l1 = relative_luminance(color1);
    let l2 = relative_luminance(color2);
    let (lighter, darker) = if l2 > l1 { (l2, l1) } else { (l1, l2) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The WCAG 2.0 conformance levels that set a minimum contrast ratio.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Level AA for normal text.
    AA,
    /// Level AA for large text (18 point, or 14 point bold).
    AALarge,
    /// Level AAA for normal text.
    AAA,
    /// Level AAA for large text.
    AAALarge,
}

impl ContrastLevel {
    /// The minimum contrast ratio the level requires.
    pub fn ratio(self) -> f64 {
        match self {
            ContrastLevel::AA => 4.5,
            ContrastLevel::AALarge => 3.0,
            ContrastLevel::AAA => 7.0,
            ContrastLevel::AAALarge => 4.5,
        }
    }
    /// Returns `true` if the two colors contrast enough to meet this level.
    pub fn is_met_by(self, color1: &LinearRGBColor, color2: &LinearRGBColor) -> bool {
        contrast_ratio(color1, color2) >= self.ratio()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::ByteColor;

    fn linear(hex: &str) -> LinearRGBColor {
        hex.parse::<ByteColor>().unwrap().to_rgb().to_linear()
    }

    #[test]
    fn test_contrast_extremes() {
        let white = LinearRGBColor{r: 1., g: 1., b: 1.};
        let black = LinearRGBColor{r: 0., g: 0., b: 0.};
        assert!((contrast_ratio(&white, &black) - 21.).abs() <= 1e-10);
        assert!((contrast_ratio(&black, &white) - 21.).abs() <= 1e-10);
        assert_eq!(contrast_ratio(&white, &white), 1.);
        assert_eq!(contrast_ratio(&black, &black), 1.);
    }

    #[test]
    fn test_contrast_symmetry() {
        let colors = ["#767676", "#ff0000", "#00ff7f", "#123456", "#fafafa"];
        for c1 in colors.iter() {
            for c2 in colors.iter() {
                let (a, b) = (linear(c1), linear(c2));
                assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
            }
            let c = linear(c1);
            assert_eq!(contrast_ratio(&c, &c), 1.);
        }
    }

    #[test]
    fn test_known_contrast() {
        // the lightest gray that passes AA on white
        let gray = linear("#767676");
        let white = linear("#ffffff");
        assert!((contrast_ratio(&gray, &white) - 4.54).abs() <= 0.01);
        assert!(ContrastLevel::AA.is_met_by(&gray, &white));
        assert!(!ContrastLevel::AAA.is_met_by(&gray, &white));
        assert!(ContrastLevel::AALarge.ratio() < ContrastLevel::AAALarge.ratio());
    }
}
