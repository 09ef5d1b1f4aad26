//! Palette file parser.
//!
//! Parses a YAML colour palette into a [`Palette`]. Each top-level key is a
//! colour name; its value is one of:
//!
//! ```yaml
//! brand:                 # simple
//!   hex: "#FF0000"
//!   alpha: 1.0
//! background:            # themed
//!   default: { hex: "#FFFFFF", alpha: 1 }
//!   dark: { hex: "#000000", alpha: 1 }
//! hero:                  # gradient (parsed, never emitted)
//!   type: linear
//!   angle: 90
//!   stops:
//!     - { color: "#FF0000", position: 0 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::{AssetError, Result};
use crate::types::{ColorDefinition, ColorValue, Gradient, GradientStop, Palette, ThemedColor};

/// A `{hex, alpha}` pair as written in YAML.
#[derive(Debug, Deserialize)]
struct RawValue {
    #[serde(default)]
    hex: String,
    #[serde(default = "default_alpha")]
    alpha: f64,
}

/// One palette entry before its shape is decided.
#[derive(Debug, Deserialize)]
struct RawColour {
    #[serde(default)]
    hex: String,
    #[serde(default = "default_alpha")]
    alpha: f64,

    default: Option<RawValue>,
    light: Option<RawValue>,
    dark: Option<RawValue>,

    #[serde(rename = "type", default)]
    kind: String,
    angle: Option<Value>,
    opacity: Option<f64>,
    #[serde(default)]
    stops: Vec<GradientStop>,
}

/// An unquoted `#` starts a YAML comment, so `hex: #FF0000` reads as empty.
const HEX_HELP: &str = "Use #RRGGBB format, e.g. \"#1A2B3C\" (quote it in YAML)";

fn default_alpha() -> f64 {
    1.0
}

/// Load and parse a palette file.
pub fn load_palette(path: &Path) -> Result<Palette> {
    let source = std::fs::read_to_string(path).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read palette: {}", e),
    })?;

    parse_palette(&source)
}

/// Parse palette YAML source.
pub fn parse_palette(source: &str) -> Result<Palette> {
    if source.trim().is_empty() {
        return Ok(Palette::new());
    }

    let raw: Option<BTreeMap<String, Option<RawColour>>> =
        serde_yaml::from_str(source).map_err(|e| AssetError::Parse {
            message: format!("Invalid palette YAML: {}", e),
            help: Some("The palette must be a mapping of colour names to definitions".to_string()),
        })?;

    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, entry)| -> Result<(String, ColorDefinition)> {
            let definition = build_definition(&name, entry)?;
            Ok((name, definition))
        })
        .collect()
}

/// Decide the shape of an entry and validate it.
///
/// A type tag makes it a gradient; otherwise a `hex` without `default` makes
/// it simple; anything else is themed.
fn build_definition(name: &str, entry: Option<RawColour>) -> Result<ColorDefinition> {
    let Some(raw) = entry else {
        return Err(AssetError::Validation {
            message: format!("colour '{}' has no definition", name),
            help: Some("Give it a hex value or default/light/dark variants".to_string()),
        });
    };

    if !raw.kind.is_empty() {
        return Ok(ColorDefinition::Gradient(Gradient {
            kind: raw.kind,
            angle: raw.angle.as_ref().and_then(scalar_to_string),
            opacity: raw.opacity,
            stops: raw.stops,
        }));
    }

    if !raw.hex.is_empty() && raw.default.is_none() {
        let value = build_value(name, None, raw.hex, raw.alpha)?;
        return Ok(ColorDefinition::Simple(value));
    }

    let variant = |label: &str, value: Option<RawValue>| {
        value
            .map(|v| build_value(name, Some(label), v.hex, v.alpha))
            .transpose()
    };

    let themed = ThemedColor::new(
        variant("default", raw.default)?,
        variant("light", raw.light)?,
        variant("dark", raw.dark)?,
    )
    .map_err(|_| AssetError::Validation {
        message: format!(
            "colour '{}' must define hex or at least one of default, light or dark",
            name
        ),
        help: Some(HEX_HELP.to_string()),
    })?;

    Ok(ColorDefinition::Themed(themed))
}

fn build_value(name: &str, variant: Option<&str>, hex: String, alpha: f64) -> Result<ColorValue> {
    let field = |key: &str| match variant {
        Some(variant) => format!("{}.{}", variant, key),
        None => key.to_string(),
    };

    if !crate::types::is_valid_hex(&hex) {
        return Err(AssetError::Validation {
            message: format!("colour '{}' has invalid {} '{}'", name, field("hex"), hex),
            help: Some(HEX_HELP.to_string()),
        });
    }

    if !(0.0..=1.0).contains(&alpha) {
        return Err(AssetError::Validation {
            message: format!(
                "colour '{}' has {} {} outside 0-1",
                name,
                field("alpha"),
                alpha
            ),
            help: None,
        });
    }

    ColorValue::new(hex, alpha)
}

/// Render a YAML scalar as text (`90` and `"90deg"` both work for angles).
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
