//! RGBA color handling for series data and render styles.
//!
//! Colors travel through the data model as CSS-style hex strings
//! (`#rgb`, `#rrggbb`, `#rrggbbaa`) and are stored as normalized
//! channels so render backends can consume them directly.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ChartError, ChartResult};

/// A color in normalized RGBA space. Channels are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Builds a color from 8-bit channels, e.g. `from_rgb8(0xe5, 0xe7, 0xeb)`.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    /// Parses a CSS-style hex color.
    ///
    /// Accepts `#rgb` (shorthand, each digit doubled), `#rrggbb` and
    /// `#rrggbbaa`. The leading `#` is required.
    pub fn from_hex_str(input: &str) -> ChartResult<Self> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ChartError::InvalidData(format!("hex color must start with '#': `{input}`")))?;

        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));

        let parse_channel = |pair: &str| u8::from_str_radix(pair, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let doubled: String = [ch, ch].iter().collect();
                    *slot = parse_channel(&doubled)?;
                }
                Ok(Self::from_rgb8(channels[0], channels[1], channels[2]))
            }
            6 => Ok(Self::from_rgb8(
                parse_channel(&digits[0..2])?,
                parse_channel(&digits[2..4])?,
                parse_channel(&digits[4..6])?,
            )),
            8 => Ok(Self::from_rgba8(
                parse_channel(&digits[0..2])?,
                parse_channel(&digits[2..4])?,
                parse_channel(&digits[4..6])?,
                parse_channel(&digits[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Renders the color back to hex, `#rrggbb` for opaque colors and
    /// `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            channel(self.alpha),
        );
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let channels = [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ];
        for (name, value) in channels {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{name}` out of range: {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex_str(&text).map_err(D::Error::custom)
    }
}
