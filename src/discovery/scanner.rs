//! File system scanner for source images.
//!
//! Walks the direct children of an input directory and groups image files
//! into logical images by base name (`icon.png`, `icon@2x.png` and
//! `icon@3x.png` all belong to `icon`).

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AssetError, Result};
use crate::types::ImageCatalog;

use super::manifest::Manifest;

/// Scan a directory for source images.
///
/// Only regular files directly inside `root` are considered, in file-name
/// order. Files with unsupported extensions or matching a manifest exclude
/// pattern are skipped.
pub fn scan_images(root: &Path, manifest: &Manifest) -> Result<ImageCatalog> {
    if !root.is_dir() {
        return Err(AssetError::Io {
            path: root.to_path_buf(),
            message: "Input path is not a directory".to_string(),
        });
    }

    let excludes = manifest.exclude_set()?;
    let mut catalog = ImageCatalog::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| AssetError::Io {
            path: e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            message: format!("Failed to scan directory: {}", e),
        })?;

        // Skip directories
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };

        if excludes.is_match(file_name) {
            continue;
        }

        catalog.add_file(file_name);
    }

    Ok(catalog)
}
