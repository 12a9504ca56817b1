//! Part colors and the strict color parser
//!
//! Colors arrive either as text from the panel's entry field (`rgb(r, g, b)` or
//! `#rrggbb`) or as a channel triple straight from the egui color picker.
//! Both end up as a [`PartColor`] or a [`PaintError::MalformedColor`].

use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use super::error::{PaintError, PaintResult};

/// Color currently assigned to a part, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct PartColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PartColor {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Opaque RGBA pixel for texture fills
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red, self.green, self.blue, u8::MAX]
    }

    /// Parse the textual forms accepted by the paint panel
    ///
    /// Accepts `rgb(r, g, b)` with any whitespace, the same without the `rgb`
    /// token or without parentheses, and `#rrggbb`. Channels must be integers
    /// in `0..=255`.
    pub fn parse(input: &str) -> PaintResult<Self> {
        let malformed = || PaintError::MalformedColor {
            input: input.to_string(),
        };

        let text = input.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(malformed);
        }

        let body = strip_rgb_token(text);
        let body = match (body.strip_prefix('('), body.ends_with(')')) {
            (Some(inner), true) => &inner[..inner.len() - 1],
            (None, false) => body,
            _ => return Err(malformed()),
        };

        let mut channels = [0u8; 3];
        let mut parts = body.split(',');
        for channel in channels.iter_mut() {
            let part = parts.next().ok_or_else(malformed)?.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            *channel = part.parse::<u8>().map_err(|_| malformed())?;
        }
        if parts.next().is_some() {
            return Err(malformed());
        }

        let [red, green, blue] = channels;
        Ok(Self::new(red, green, blue))
    }
}

fn strip_rgb_token(text: &str) -> &str {
    match text.get(..3) {
        Some(token) if token.eq_ignore_ascii_case("rgb") => text[3..].trim_start(),
        _ => text,
    }
}

fn parse_hex(hex: &str) -> Option<PartColor> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(PartColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl fmt::Display for PartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl FromStr for PartColor {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 3]> for PartColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<PartColor> for Color {
    fn from(color: PartColor) -> Self {
        Color::srgb_u8(color.red, color.green, color.blue)
    }
}

/// Color as supplied by a paint request, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Free text, e.g. `rgb(255, 0, 0)`
    Text(String),
    /// Channel triple from a structured source such as the color picker
    Channels([u8; 3]),
}

impl ColorInput {
    pub fn resolve(&self) -> PaintResult<PartColor> {
        match self {
            ColorInput::Text(text) => PartColor::parse(text),
            ColorInput::Channels(channels) => Ok(PartColor::from(*channels)),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(channels: [u8; 3]) -> Self {
        ColorInput::Channels(channels)
    }
}

impl From<PartColor> for ColorInput {
    fn from(color: PartColor) -> Self {
        ColorInput::Channels(color.channels())
    }
}
