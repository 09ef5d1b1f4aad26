//! iOS colour set output.
//!
//! Writes `<output>/<name>.colorset/Contents.json` for every non-gradient
//! palette entry. The universal entry carries the default colour; light and
//! dark appearance entries are only added when they differ from it.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::types::{format_component, ColorDefinition, ColorValue, Palette};

use super::{ensure_dir, write_contents_json, ContentsInfo, EmitReport};

/// Writes `.colorset` folders.
#[derive(Debug, Clone)]
pub struct IosColorEmitter {
    output: PathBuf,
}

impl IosColorEmitter {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn emit(&self, palette: &Palette) -> Result<EmitReport> {
        ensure_dir(&self.output)?;

        let mut report = EmitReport {
            skipped: palette.gradient_count(),
            ..Default::default()
        };

        for (name, definition) in palette.solid_colours() {
            let dir = self.output.join(format!("{}.colorset", name));
            ensure_dir(&dir)
                .and_then(|_| write_contents_json(&dir, &build_color_set(definition)))
                .map_err(|e| e.context(format!("Failed to generate colour set '{}'", name)))?;
            report.written += 1;
        }

        Ok(report)
    }
}

/// Build the `Contents.json` descriptor for one colour.
pub fn build_color_set(definition: &ColorDefinition) -> ColorSet {
    let default = definition.resolve_default();
    let mut colors = Vec::new();

    if let Some(value) = default {
        colors.push(ColorEntry::new(value, None));
    }

    for (appearance, resolved) in [
        ("light", definition.resolve_light()),
        ("dark", definition.resolve_dark()),
    ] {
        if let Some(value) = resolved {
            if default != Some(value) {
                colors.push(ColorEntry::new(value, Some(appearance)));
            }
        }
    }

    ColorSet {
        colors,
        info: ContentsInfo::default(),
    }
}

/// A colour set's `Contents.json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorSet {
    colors: Vec<ColorEntry>,
    info: ContentsInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct ColorEntry {
    color: ColorSpec,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    appearances: Vec<Appearance>,
    idiom: &'static str,
}

impl ColorEntry {
    fn new(value: &ColorValue, luminosity: Option<&'static str>) -> Self {
        let rgb = value.components();
        Self {
            color: ColorSpec {
                color_space: "srgb",
                components: Components {
                    alpha: format_component(value.alpha()),
                    blue: format_component(rgb.blue),
                    green: format_component(rgb.green),
                    red: format_component(rgb.red),
                },
            },
            appearances: luminosity
                .map(|value| Appearance {
                    appearance: "luminosity",
                    value,
                })
                .into_iter()
                .collect(),
            idiom: "universal",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct ColorSpec {
    #[serde(rename = "color-space")]
    color_space: &'static str,
    components: Components,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct Components {
    alpha: String,
    blue: String,
    green: String,
    red: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct Appearance {
    appearance: &'static str,
    value: &'static str,
}
