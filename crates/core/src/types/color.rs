//! Hex colours and their HSL representation.
//!
//! Palette slots are stored as the raw strings the user entered. They are only
//! parsed when derived style values are computed, and anything that is not a
//! strict six-digit hex colour converts to [`Hsl::ZERO`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`HexColor`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not exactly six digits after the optional `#`.
    #[error("hex colour must have exactly 6 digits, got {0}")]
    InvalidLength(usize),
    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// An RGB colour parsed from `#rrggbb` or `rrggbb`.
///
/// ```
/// use saranya_core::HexColor;
///
/// let gold = HexColor::parse("#d4a533").unwrap();
/// assert_eq!(gold.to_hsl().to_string(), "42 65% 52%");
/// assert!(HexColor::parse("#zzzzzz").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Create a colour from channel bytes.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict six-digit hex colour, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has the wrong number of digits or
    /// contains a non-hex character.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit(bad));
        }
        if digits.len() != 6 {
            return Err(ColorError::InvalidLength(digits.len()));
        }

        let channel = |range: core::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(ColorError::InvalidLength(digits.len()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Red, green and blue channel bytes.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to whole-number HSL using the standard RGB to HSL formula.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if (max - min).abs() < f64::EPSILON {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let saturation = if lightness > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            // Red wins ties, then green.
            let sector = if (max - r).abs() < f64::EPSILON {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if (max - g).abs() < f64::EPSILON {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            (sector / 6.0, saturation)
        };

        Hsl {
            hue: (hue * 360.0).round() as u16,
            saturation: (saturation * 100.0).round() as u8,
            lightness: (lightness * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Hue in degrees, saturation and lightness in percent.
///
/// Displays as `"H S% L%"`, the format style variables expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Hsl {
    /// Hue, 0-360 degrees.
    pub hue: u16,
    /// Saturation, 0-100 percent.
    pub saturation: u8,
    /// Lightness, 0-100 percent.
    pub lightness: u8,
}

impl Hsl {
    /// Fallback value for malformed colours.
    pub const ZERO: Self = Self {
        hue: 0,
        saturation: 0,
        lightness: 0,
    };

    /// Convert a hex string, falling back to [`Hsl::ZERO`] when it is malformed.
    #[must_use]
    pub fn from_hex_lossy(hex: &str) -> Self {
        HexColor::parse(hex).map_or(Self::ZERO, HexColor::to_hsl)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}
