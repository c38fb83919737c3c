//! Terminal colors and foreground painting.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::text::ansi::SGR_RESET;

/// A foreground color understood by the host's styling renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default; paints nothing.
    #[default]
    Default,
    /// One of the 16 basic palette entries (0..=15).
    Ansi(u8),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color '{value}': expected #rgb or #rrggbb")]
    InvalidHex { value: String },

    #[error("invalid palette color '{value}': expected an integer in 0..=255")]
    InvalidIndex { value: String },
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Foreground SGR sequence, empty for [`Color::Default`].
    pub fn fg_sgr(self) -> String {
        match self {
            Color::Default => String::new(),
            Color::Ansi(code) if code < 8 => format!("\x1b[{}m", 30 + u16::from(code)),
            Color::Ansi(code) if code < 16 => format!("\x1b[{}m", 90 + u16::from(code - 8)),
            Color::Ansi(code) | Color::Indexed(code) => format!("\x1b[38;5;{code}m"),
            Color::Rgb(r, g, b) => format!("\x1b[38;2;{r};{g};{b}m"),
        }
    }

    /// Wraps `text` in this color, followed by a full reset.
    pub fn paint(self, text: &str) -> String {
        if text.is_empty() || self == Color::Default {
            return text.to_string();
        }
        let open = self.fg_sgr();
        let mut out = String::with_capacity(open.len() + text.len() + SGR_RESET.len());
        out.push_str(&open);
        out.push_str(text);
        out.push_str(SGR_RESET);
        out
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex {
                value: trimmed.to_string(),
            });
        }

        let index = trimmed
            .parse::<u8>()
            .map_err(|_| ColorParseError::InvalidIndex {
                value: trimmed.to_string(),
            })?;
        Ok(if index < 16 {
            Color::Ansi(index)
        } else {
            Color::Indexed(index)
        })
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let mut channels = hex.chars().map(|ch| {
                let nibble = ch.to_digit(16).unwrap_or(0) as u8;
                nibble * 17
            });
            let r = channels.next()?;
            let g = channels.next()?;
            let b = channels.next()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Default => f.write_str("default"),
            Color::Ansi(code) | Color::Indexed(code) => write!(f, "{code}"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
