//! Colour value type and parsing.

use palette::Srgb;

use crate::error::{AssetError, Result};

/// A single validated colour: `#RRGGBB` plus an alpha in `[0, 1]`.
///
/// The hex text is kept exactly as written so platform output can echo it
/// back, while comparisons use the parsed channels.
#[derive(Debug, Clone)]
pub struct ColorValue {
    hex: String,
    rgb: Srgb<u8>,
    alpha: f64,
}

impl ColorValue {
    /// Create a colour value, validating the hex string and alpha range.
    pub fn new(hex: impl Into<String>, alpha: f64) -> Result<Self> {
        let hex = hex.into();
        let rgb = parse_hex(&hex)?;

        if !(0.0..=1.0).contains(&alpha) {
            return Err(AssetError::Validation {
                message: format!("alpha must be between 0 and 1, got {}", alpha),
                help: None,
            });
        }

        Ok(Self { hex, rgb, alpha })
    }

    /// Create an opaque colour value.
    pub fn opaque(hex: impl Into<String>) -> Result<Self> {
        Self::new(hex, 1.0)
    }

    /// The hex string as written in the palette, including the leading `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The 8-bit sRGB channels.
    pub fn rgb(&self) -> Srgb<u8> {
        self.rgb
    }

    /// Channels scaled to `[0, 1]`.
    pub fn components(&self) -> Srgb<f64> {
        self.rgb.into_format()
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// Alpha as an 8-bit value, truncated.
    pub fn alpha_byte(&self) -> u8 {
        (self.alpha * 255.0) as u8
    }
}

impl PartialEq for ColorValue {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb && self.alpha == other.alpha
    }
}

/// Check that a string is `#` followed by exactly six hex digits.
pub fn is_valid_hex(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Parse a `#RRGGBB` string into 8-bit channels.
fn parse_hex(hex: &str) -> Result<Srgb<u8>> {
    if !is_valid_hex(hex) {
        return Err(AssetError::Validation {
            message: format!("invalid hex colour '{}'", hex),
            help: Some("Use #RRGGBB format, e.g. \"#1A2B3C\" (quote it in YAML)".to_string()),
        });
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| AssetError::Validation {
            message: format!("invalid hex colour '{}'", hex),
            help: None,
        })
    };

    Ok(Srgb::new(byte(1..3)?, byte(3..5)?, byte(5..7)?))
}

/// Format a channel value to three decimals, dropping trailing zeros but
/// keeping at least one digit after the point.
pub fn format_component(value: f64) -> String {
    let mut s = format!("{:.3}", value);
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}
