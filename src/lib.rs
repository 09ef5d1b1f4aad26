//! appassets - iOS and Android resource generator
//!
//! A library for turning designer-authored assets (a YAML colour palette
//! and a folder of `@2x`/`@3x` images) into iOS asset-catalog folders and
//! Android resource directories.

pub mod cli;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use discovery::{scan_images, Manifest};
pub use emit::{
    AndroidColorEmitter, AndroidImageEmitter, EmitReport, IosColorEmitter, IosImageEmitter,
};
pub use error::{AssetError, Result};
pub use parser::{load_palette, parse_palette};
pub use types::{
    map_densities, ColorDefinition, ColorValue, Density, DensityMapping, Gradient, ImageCatalog,
    ImageInfo, Palette, Platform, Scale, ThemedColor, DENSITIES, IOS_SCALES,
};
