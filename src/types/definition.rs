//! Colour definitions and theme resolution.
//!
//! A palette entry takes one of three shapes. Resolution turns any
//! non-gradient shape into a concrete colour for each theme context:
//!
//! - default: explicit `default`, else `light`
//! - light: explicit `light`, else the resolved default
//! - dark: explicit `dark`, else the resolved default
//!
//! Simple colours resolve to their single value in every context.

use crate::error::{AssetError, Result};

use super::colour::ColorValue;

/// A colour with per-theme variants. At least one variant is always set.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemedColor {
    default: Option<ColorValue>,
    light: Option<ColorValue>,
    dark: Option<ColorValue>,
}

impl ThemedColor {
    pub fn new(
        default: Option<ColorValue>,
        light: Option<ColorValue>,
        dark: Option<ColorValue>,
    ) -> Result<Self> {
        if default.is_none() && light.is_none() && dark.is_none() {
            return Err(AssetError::Validation {
                message: "themed colour must define at least one of default, light or dark"
                    .to_string(),
                help: None,
            });
        }

        Ok(Self {
            default,
            light,
            dark,
        })
    }
}

/// A single gradient stop, kept as the raw key/value record from the palette.
pub type GradientStop = serde_yaml::Mapping;

/// A gradient entry. Parsed so palettes round-trip, never emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: String,
    pub angle: Option<String>,
    pub opacity: Option<f64>,
    pub stops: Vec<GradientStop>,
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorDefinition {
    /// One value for every theme.
    Simple(ColorValue),
    /// Per-theme values with fallback.
    Themed(ThemedColor),
    /// Recognized but skipped by every emitter.
    Gradient(Gradient),
}

impl ColorDefinition {
    pub fn is_gradient(&self) -> bool {
        matches!(self, ColorDefinition::Gradient(_))
    }

    /// The colour used when no theme is specified.
    ///
    /// Returns `None` for gradients and for themed colours that only
    /// define `dark`.
    pub fn resolve_default(&self) -> Option<&ColorValue> {
        match self {
            ColorDefinition::Simple(value) => Some(value),
            ColorDefinition::Themed(themed) => themed.default.as_ref().or(themed.light.as_ref()),
            ColorDefinition::Gradient(_) => None,
        }
    }

    /// The colour used in the light theme.
    pub fn resolve_light(&self) -> Option<&ColorValue> {
        match self {
            ColorDefinition::Simple(value) => Some(value),
            ColorDefinition::Themed(themed) => {
                themed.light.as_ref().or_else(|| self.resolve_default())
            }
            ColorDefinition::Gradient(_) => None,
        }
    }

    /// The colour used in the dark theme.
    pub fn resolve_dark(&self) -> Option<&ColorValue> {
        match self {
            ColorDefinition::Simple(value) => Some(value),
            ColorDefinition::Themed(themed) => {
                themed.dark.as_ref().or_else(|| self.resolve_default())
            }
            ColorDefinition::Gradient(_) => None,
        }
    }
}
