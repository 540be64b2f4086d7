//! Shape styles: colors, stroke and text attributes.
//!
//! Styles are shared read-only between shapes via `Arc<Style>`; the
//! editor assigns the container's current style to every shape it
//! creates. Hit testing never looks at styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// An ARGB color with 8-bit channels.
///
/// Serialized as the `#AARRGGBB` hex literal used in style sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const BLACK: Color = Color {
        a: 0xFF,
        r: 0x00,
        g: 0x00,
        b: 0x00,
    };

    pub const WHITE: Color = Color {
        a: 0xFF,
        r: 0xFF,
        g: 0xFF,
        b: 0xFF,
    };

    pub const TRANSPARENT: Color = Color {
        a: 0x00,
        r: 0x00,
        g: 0x00,
        b: 0x00,
    };
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError::InvalidFormat {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 8 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| ColorParseError::InvalidDigit {
                value: s.to_string(),
            })
        };
        Ok(Color {
            a: channel(0)?,
            r: channel(2)?,
            g: channel(4)?,
            b: channel(6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.a, self.r, self.g, self.b
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Font attributes for text shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_name: String,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_size: 12.0,
        }
    }
}

/// A named drawing style: stroke and fill colors, stroke thickness and
/// text attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,
    pub stroke: Color,
    pub fill: Color,
    pub thickness: f64,
    pub text: TextStyle,
}

impl Style {
    pub fn new(name: impl Into<String>, stroke: Color, fill: Color, thickness: f64) -> Self {
        Self {
            name: name.into(),
            stroke,
            fill,
            thickness,
            text: TextStyle::default(),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::new("Default", Color::BLACK, Color::WHITE, 2.0)
    }
}
