//! Android density buckets and the mapping from iOS-style source scales.
//!
//! Source sets are often incomplete, so each bucket is filled with the
//! closest available scale without resampling. Rules, applied in order:
//!
//! 1. 1x fills mdpi.
//! 2. 2x fills hdpi and xhdpi, and mdpi when 1x is missing.
//! 3. 3x fills xxhdpi and xxxhdpi. Without 2x it also fills xhdpi, and
//!    without 1x as well it fills mdpi and hdpi.
//! 4. A lone 1x fills every bucket.
//!
//! Buckets left empty produce no output.

use std::fmt;

use super::image::{ImageInfo, Scale};

/// An Android screen-density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

/// All buckets, lowest density first.
pub const DENSITIES: [Density; 5] = [
    Density::Mdpi,
    Density::Hdpi,
    Density::Xhdpi,
    Density::Xxhdpi,
    Density::Xxxhdpi,
];

impl Density {
    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Scale multiplier relative to mdpi.
    pub fn scale(self) -> f32 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// Resource directory name, e.g. `drawable-xhdpi`.
    pub fn directory(self) -> String {
        format!("drawable-{}", self)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which source scale (if any) supplies each density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DensityMapping {
    slots: [Option<Scale>; 5],
}

impl DensityMapping {
    pub fn get(&self, density: Density) -> Option<Scale> {
        self.slots[density.index()]
    }

    fn assign(&mut self, densities: &[Density], scale: Scale) {
        for density in densities {
            self.slots[density.index()] = Some(scale);
        }
    }

    /// Assigned buckets in density order.
    pub fn iter(&self) -> impl Iterator<Item = (Density, Scale)> + '_ {
        DENSITIES
            .iter()
            .filter_map(|&density| self.get(density).map(|scale| (density, scale)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Decide which source scale fills each Android density bucket.
pub fn map_densities(info: &ImageInfo) -> DensityMapping {
    use Density::*;

    let mut mapping = DensityMapping::default();

    if info.has_1x && !info.has_2x && !info.has_3x {
        mapping.assign(&DENSITIES, Scale::One);
        return mapping;
    }

    if info.has_1x {
        mapping.assign(&[Mdpi], Scale::One);
    }

    if info.has_2x {
        mapping.assign(&[Hdpi, Xhdpi], Scale::Two);
        if !info.has_1x {
            mapping.assign(&[Mdpi], Scale::Two);
        }
    }

    if info.has_3x {
        mapping.assign(&[Xxhdpi, Xxxhdpi], Scale::Three);
        if !info.has_2x {
            mapping.assign(&[Xhdpi], Scale::Three);
            if !info.has_1x {
                mapping.assign(&[Mdpi, Hdpi], Scale::Three);
            }
        }
    }

    mapping
}
