//! Core domain types for appassets.
//!
//! This module contains the data model shared by both pipelines:
//! - `ColorValue` / `ColorDefinition` / `Palette` - colour palette entries
//!   and their theme resolution
//! - `ImageInfo` / `ImageCatalog` - scanned source images
//! - `Density` / `map_densities` - Android density bucket mapping
//! - `Platform` - which bundles a run generates

mod colour;
mod definition;
mod density;
mod image;
mod palette;
mod platform;

pub use colour::{format_component, is_valid_hex, ColorValue};
pub use definition::{ColorDefinition, Gradient, GradientStop, ThemedColor};
pub use density::{map_densities, Density, DensityMapping, DENSITIES};
pub use image::{parse_image_name, ImageCatalog, ImageInfo, Scale, IOS_SCALES, SUPPORTED_EXTENSIONS};
pub use palette::Palette;
pub use platform::Platform;
