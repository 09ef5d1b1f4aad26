//! Android drawable output.
//!
//! Copies each image into the `drawable-*` buckets chosen by
//! [`map_densities`], renamed to a valid resource name.

use std::path::PathBuf;

use crate::error::Result;
use crate::types::{map_densities, ImageCatalog, ImageInfo};

use super::{copy_file, ensure_dir, EmitReport};

/// Convert a logical image name into an Android resource name
/// (lowercase, hyphens replaced by underscores).
pub fn android_resource_name(name: &str) -> String {
    name.to_lowercase().replace('-', "_")
}

/// Writes `drawable-<density>` folders.
#[derive(Debug, Clone)]
pub struct AndroidImageEmitter {
    input: PathBuf,
    output: PathBuf,
}

impl AndroidImageEmitter {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn emit(&self, catalog: &ImageCatalog) -> Result<EmitReport> {
        ensure_dir(&self.output)?;

        let mut report = EmitReport::default();
        for image in catalog.iter() {
            self.emit_image(image)
                .map_err(|e| e.context(format!("Failed to generate drawable '{}'", image.name)))?;
            report.written += 1;
        }

        Ok(report)
    }

    fn emit_image(&self, image: &ImageInfo) -> Result<()> {
        let file_name = format!("{}{}", android_resource_name(&image.name), image.extension);

        for (density, scale) in map_densities(image).iter() {
            let Some(source) = image.file_for(scale) else {
                continue;
            };

            let dst = self.output.join(density.directory()).join(&file_name);
            copy_file(&self.input.join(source), &dst)?;
        }

        Ok(())
    }
}
