//! RGB fill colors and their hex notation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An opaque RGB color.
///
/// The quantizer feeding this pipeline produces opaque cluster colors, so
/// there is no alpha channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

/// Formats as `#rrggbb`, the notation used in the emitted documents.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invalid color: expected #rgb or #rrggbb, got {0:?}")]
pub struct ParseColorError(pub String);

/// Parses `#rgb` and `#rrggbb` hex notation.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(src: &str) -> Result<Color, ParseColorError> {
        let err = || ParseColorError(src.to_string());
        let hex = src.strip_prefix('#').ok_or_else(err)?;

        let nibble = |c: char| c.to_digit(16).map(|d| d as u8).ok_or_else(err);
        let mut digits = hex.chars();

        match hex.len() {
            3 => {
                let mut next = || -> Result<u8, ParseColorError> {
                    let d = nibble(digits.next().ok_or_else(err)?)?;
                    Ok(d << 4 | d)
                };
                Ok(Color::new(next()?, next()?, next()?))
            }
            6 => {
                let mut next = || -> Result<u8, ParseColorError> {
                    let hi = nibble(digits.next().ok_or_else(err)?)?;
                    let lo = nibble(digits.next().ok_or_else(err)?)?;
                    Ok(hi << 4 | lo)
                };
                Ok(Color::new(next()?, next()?, next()?))
            }
            _ => Err(err()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hex() {
        assert_eq!(Color::new(255, 0, 128).to_string(), "#ff0080");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn parse_long_form() {
        assert_eq!("#ff0080".parse(), Ok(Color::new(255, 0, 128)));
        assert_eq!("#FFFFFF".parse(), Ok(Color::WHITE));
    }

    #[test]
    fn parse_short_form() {
        assert_eq!("#f08".parse(), Ok(Color::new(255, 0, 136)));
        assert_eq!("#000".parse(), Ok(Color::BLACK));
    }

    #[test]
    fn parse_invalid() {
        assert!("ff0080".parse::<Color>().is_err());
        assert!("#ff00".parse::<Color>().is_err());
        assert!("#gggggg".parse::<Color>().is_err());
    }
}
