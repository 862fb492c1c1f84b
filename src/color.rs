//! Color attribute parsing

use crate::diagnostics_enabled;
use crate::error::{ParseError, Result};
use crate::types::Color;

/// `#` marks a literal color value; anything else routes through the
/// resource pipeline instead of this parser.
pub fn is_color_value(color: &str) -> bool {
    color.starts_with('#')
}

/// Strict hex color parse: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
/// Single-digit forms expand each digit, so `#F00` is `#FF0000`.
pub fn parse_hex_color(color_str: &str) -> Result<Color> {
    let trimmed = color_str.trim();
    let hex = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ParseError::invalid_color(format!("color must start with #: {}", color_str)))?
        .as_bytes();

    match hex.len() {
        3 | 4 => {
            let r = hex_nibble(color_str, hex[0])?;
            let g = hex_nibble(color_str, hex[1])?;
            let b = hex_nibble(color_str, hex[2])?;
            let a = if hex.len() == 4 {
                hex_nibble(color_str, hex[3])?
            } else {
                0x0F
            };
            Ok(Color::new(r * 17, g * 17, b * 17, a * 17))
        }
        6 | 8 => {
            let r = hex_pair(color_str, hex[0], hex[1])?;
            let g = hex_pair(color_str, hex[2], hex[3])?;
            let b = hex_pair(color_str, hex[4], hex[5])?;
            let a = if hex.len() == 8 {
                hex_pair(color_str, hex[6], hex[7])?
            } else {
                255
            };
            Ok(Color::new(r, g, b, a))
        }
        _ => Err(ParseError::invalid_color(format!(
            "{} (expected 3, 4, 6, or 8 hex digits)",
            color_str
        ))),
    }
}

/// Parse a color attribute, defaulting to opaque black when the value is
/// not a well-formed color.
pub fn parse_color(color: &str) -> Color {
    match parse_hex_color(color) {
        Ok(parsed) => parsed,
        Err(e) => {
            if diagnostics_enabled() {
                log::error!("{}, using #000000", e);
            }
            Color::BLACK
        }
    }
}

fn hex_nibble(color_str: &str, byte: u8) -> Result<u8> {
    (byte as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ParseError::invalid_color(color_str.to_string()))
}

fn hex_pair(color_str: &str, hi: u8, lo: u8) -> Result<u8> {
    Ok(hex_nibble(color_str, hi)? * 16 + hex_nibble(color_str, lo)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_color_value() {
        assert!(is_color_value("#FF0000"));
        assert!(!is_color_value("@color/primary"));
        assert!(!is_color_value("red"));
    }

    #[test]
    fn test_parse_hex_color_forms() {
        assert_eq!(parse_hex_color("#FF0000").unwrap(), Color::new(255, 0, 0, 255));
        assert_eq!(parse_hex_color("#F00").unwrap(), Color::new(255, 0, 0, 255));
        assert_eq!(parse_hex_color("#F008").unwrap(), Color::new(255, 0, 0, 0x88));
        assert_eq!(
            parse_hex_color("#12345678").unwrap(),
            Color::new(0x12, 0x34, 0x56, 0x78)
        );
        assert_eq!(parse_hex_color("#abc").unwrap(), Color::new(0xAA, 0xBB, 0xCC, 255));
    }

    #[test]
    fn test_parse_hex_color_rejects() {
        assert!(parse_hex_color("FF0000").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn test_parse_color_defaults_to_black() {
        assert_eq!(parse_color("#FF0000"), Color::new(255, 0, 0, 255));
        assert_eq!(parse_color("not-a-color"), Color::BLACK);
        assert_eq!(parse_color(""), Color::BLACK);
        assert_eq!(parse_color("#XYZ"), Color::BLACK);
    }
}
