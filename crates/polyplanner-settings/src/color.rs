//! RGBA color values carried through to the rendering collaborator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// An 8-bit RGBA color, serialized as `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, SettingsError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || SettingsError::InvalidColor(hex.to_string());

        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };

        Ok(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
