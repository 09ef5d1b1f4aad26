//! Palette type for named colour collections.

use std::collections::BTreeMap;

use super::definition::ColorDefinition;

/// A collection of named colour definitions.
///
/// Names are unique and case-sensitive. Iteration is always in ascending
/// byte order so generated output is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colours: BTreeMap<String, ColorDefinition>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a colour definition by name.
    pub fn get(&self, name: &str) -> Option<&ColorDefinition> {
        self.colours.get(name)
    }

    /// Iterate over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorDefinition)> {
        self.colours.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Iterate over entries that can be emitted (everything but gradients).
    pub fn solid_colours(&self) -> impl Iterator<Item = (&str, &ColorDefinition)> {
        self.iter().filter(|(_, def)| !def.is_gradient())
    }

    /// Number of gradient entries.
    pub fn gradient_count(&self) -> usize {
        self.colours.values().filter(|def| def.is_gradient()).count()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Insert a definition, replacing any previous entry with the same name.
    pub fn insert(&mut self, name: impl Into<String>, definition: ColorDefinition) {
        self.colours.insert(name.into(), definition);
    }
}

impl FromIterator<(String, ColorDefinition)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, ColorDefinition)>>(iter: I) -> Self {
        Self {
            colours: iter.into_iter().collect(),
        }
    }
}
