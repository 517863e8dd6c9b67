//! Packed ARGB colors
//!
//! Colors are stored the way the attribute system hands them out: one
//! `u32` with alpha in the high byte. Hex literals, color names and SVG
//! serialization all go through this type.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a color literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color '{0}' (expected #rgb, #argb, #rrggbb or #aarrggbb)")]
    InvalidHex(String),
    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

/// An 8-bit-per-channel color packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

/// Named colors accepted in attribute values
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
    ("transparent", 0x00000000),
];

impl Color {
    pub const BLACK: Color = Color(0xFF000000);
    pub const WHITE: Color = Color(0xFFFFFFFF);
    pub const RED: Color = Color(0xFFFF0000);
    pub const TRANSPARENT: Color = Color(0x00000000);

    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a `#`-prefixed hex literal
    ///
    /// Short forms expand each nibble (`#f00` is `#ffff0000`). Forms
    /// without an alpha channel are fully opaque.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 => std::iter::once('f')
                .chain(digits.chars())
                .flat_map(|c| [c, c])
                .collect(),
            4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => format!("ff{}", digits),
            8 => digits.to_string(),
            _ => return Err(invalid()),
        };

        u32::from_str_radix(&expanded, 16)
            .map(Color)
            .map_err(|_| invalid())
    }

    /// Look up a built-in color name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == lower)
            .map(|(_, argb)| Color(*argb))
    }

    /// `#rrggbb` form for SVG paint attributes (alpha is emitted separately)
    pub fn to_svg_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }

    /// Opacity in `0.0..=1.0`
    pub fn opacity(self) -> f64 {
        self.alpha() as f64 / 255.0
    }

    pub fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_name(s).ok_or_else(|| ColorError::UnknownName(s.to_string()))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Color::from_hex("#f00").unwrap(), Color(0xFFFF0000));
        assert_eq!(Color::from_hex("#8f00").unwrap(), Color(0x88FF0000));
        assert_eq!(Color::from_hex("#00ff00").unwrap(), Color(0xFF00FF00));
        assert_eq!(Color::from_hex("#80112233").unwrap(), Color(0x80112233));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("ff0000").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_channels() {
        let c = Color::from_argb(0x80, 0x11, 0x22, 0x33);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x11);
        assert_eq!(c.green(), 0x22);
        assert_eq!(c.blue(), 0x33);
        assert!(!c.is_opaque());
    }

    #[test]
    fn test_names() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::RED);
        assert_eq!(Color::from_name("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ColorError::UnknownName("chartreuse".to_string()))
        );
    }

    #[test]
    fn test_svg_hex() {
        assert_eq!(Color::from_rgb(0xAB, 0xCD, 0xEF).to_svg_hex(), "#abcdef");
        assert_eq!(Color::BLACK.opacity(), 1.0);
    }
}
