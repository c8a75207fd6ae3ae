use palette::{LinSrgb, Srgb};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a hex color")]
pub struct ColorError(String);

/// An sRGB color as written in the dataset (`#RGB` or `#RRGGBB`).
///
/// Always displayed as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
}

impl Color {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn rgb(&self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }

    /// Picks black or white, whichever reads better on top of this color.
    pub fn contrasting(&self) -> Self {
        let linear: LinSrgb<f32> = self.rgb().into_format::<f32>().into_linear();
        let luminance = 0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue;
        if luminance > 0.4 {
            Self::new(0, 0, 0)
        } else {
            Self::new(255, 255, 255)
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with('#') {
            return Err(ColorError(s.to_string()));
        }
        trimmed
            .parse::<Srgb<u8>>()
            .map(Self::from)
            .map_err(|_| ColorError(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (self.red, self.green, self.blue);
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        let (red, green, blue) = rgb.into_components();
        Self { red, green, blue }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let cases = vec![
            ("#FFD700", "#FFD700"),
            ("#ffd700", "#FFD700"),
            (" #d3d3d3 ", "#D3D3D3"),
            ("#fff", "#FFFFFF"),
        ];

        for (input, expected) in cases {
            let color: Color = input.parse().unwrap();
            assert_eq!(color.to_string(), expected);
        }
    }

    #[test]
    fn test_rejects_non_hex() {
        for input in ["gold", "FFD700", "#GG0000", "", "#12345"] {
            assert!(input.parse::<Color>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_deserialize_from_json() {
        let color: Color = serde_json::from_str("\"#AA3366\"").unwrap();
        assert_eq!(color, Color::new(0xAA, 0x33, 0x66));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#AA3366\"");
    }

    #[test]
    fn test_contrasting() {
        assert_eq!(Color::new(0xFF, 0xD7, 0x00).contrasting(), Color::new(0, 0, 0));
        assert_eq!(Color::new(0x20, 0x20, 0x60).contrasting(), Color::new(255, 255, 255));
    }
}
