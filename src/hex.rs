//! This file handles the `#rrggbb` notation that stylesheets and design tools use for colors, along
//! with CSS's `transparent` for the absence of one. Parsing is strict: exactly six hex digits after a
//! `#`, in either case. Printing always gives lowercase, zero-padded digits.

use std::error::Error;
use std::fmt;

use color::ByteColor;
use regex::Regex;

/// What an absent color prints as, and parses from.
pub const TRANSPARENT: &str = "transparent";

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// An error in parsing hex color notation.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexParseError {
    /// The string didn't start with `#`.
    MissingHash,
    /// The string started with `#` but wasn't followed by exactly six characters.
    InvalidLength,
    /// Something other than `0-9`, `a-f`, or `A-F` followed the `#`.
    InvalidDigits,
    /// The string was `transparent`, but a color was required.
    Transparent,
}

impl fmt::Display for HexParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            HexParseError::MissingHash => "hex color must start with '#'",
            HexParseError::InvalidLength => "hex color must have exactly six digits",
            HexParseError::InvalidDigits => "hex color has non-hexadecimal digits",
            HexParseError::Transparent => "expected a color, found transparent",
        };
        write!(f, "{}", msg)
    }
}

impl Error for HexParseError {}

/// Formats one channel as two lowercase hex digits.
/// # Example
/// ```
/// # use labsat::hex::byte_to_hex;
/// assert_eq!(byte_to_hex(5), "05");
/// assert_eq!(byte_to_hex(171), "ab");
/// ```
pub fn byte_to_hex(channel: u8) -> String {
    format!("{:02x}", channel)
}

/// Formats a color as `#rrggbb`, or as `transparent` if there is no color.
/// # Example
/// ```
/// # use labsat::prelude::*;
/// # use labsat::hex::to_hex;
/// assert_eq!(to_hex(Some(ByteColor{r: 255, g: 0, b: 10})), "#ff000a");
/// assert_eq!(to_hex(None), "transparent");
/// ```
pub fn to_hex(color: Option<ByteColor>) -> String {
    match color {
        Some(c) => c.to_string(),
        None => TRANSPARENT.to_string(),
    }
}

/// Parses `#rrggbb` notation, or `transparent` as the absence of a color. The inverse of
/// [`to_hex`].
pub fn parse_hex(hex: &str) -> Result<Option<ByteColor>, HexParseError> {
    if hex == TRANSPARENT {
        return Ok(None);
    }
    if !hex.starts_with('#') {
        return Err(HexParseError::MissingHash);
    }
    if hex.chars().count() != 7 {
        return Err(HexParseError::InvalidLength);
    }
    let caps = HEX_COLOR
        .captures(hex)
        .ok_or(HexParseError::InvalidDigits)?;
    // the pattern guarantees two hex digits per group, so these can't fail
    let channel = |i: usize| {
        caps.get(i)
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
            .ok_or(HexParseError::InvalidDigits)
    };
    Ok(Some(ByteColor {
        r: channel(1)?,
        g: channel(2)?,
        b: channel(3)?,
    }))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex("#ff0000"), Ok(Some(ByteColor{r: 255, g: 0, b: 0})));
        assert_eq!(parse_hex("#0A0b0C"), Ok(Some(ByteColor{r: 10, g: 11, b: 12})));
        assert_eq!(parse_hex("transparent"), Ok(None));
        assert_eq!("#ff0000".parse::<ByteColor>(), Ok(ByteColor{r: 255, g: 0, b: 0}));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_hex("ff0000"), Err(HexParseError::MissingHash));
        assert_eq!(parse_hex("#ff000"), Err(HexParseError::InvalidLength));
        assert_eq!(parse_hex("#ff00000"), Err(HexParseError::InvalidLength));
        assert_eq!(parse_hex("#ff00zz"), Err(HexParseError::InvalidDigits));
        assert_eq!(parse_hex("#+f0000"), Err(HexParseError::InvalidDigits));
        assert_eq!("transparent".parse::<ByteColor>(), Err(HexParseError::Transparent));
        assert_eq!(
            HexParseError::InvalidLength.to_string(),
            "hex color must have exactly six digits"
        );
    }

    #[test]
    fn test_hex_round_trip() {
        for r in (0..=255u8).step_by(5) {
            let color = ByteColor{r, g: 255 - r, b: r.wrapping_mul(7)};
            let hex = to_hex(Some(color));
            assert_eq!(hex.len(), 7);
            assert_eq!(parse_hex(&hex), Ok(Some(color)));
        }
        assert_eq!(parse_hex(&to_hex(None)), Ok(None));
    }
}
