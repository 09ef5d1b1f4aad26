//! Input discovery for appassets runs.
//!
//! This module handles finding the optional `appassets.yaml` manifest and
//! scanning an image directory into an [`ImageCatalog`](crate::types::ImageCatalog).
//!
//! # Example
//!
//! ```ignore
//! use appassets::discovery::{scan_images, Manifest};
//!
//! let manifest = Manifest::find(Path::new("."))?.unwrap_or_default();
//! let catalog = scan_images(Path::new("design/icons"), &manifest)?;
//! println!("Found {} images", catalog.len());
//! ```

mod manifest;
mod scanner;

pub use manifest::Manifest;
pub use scanner::scan_images;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "appassets.yaml";
