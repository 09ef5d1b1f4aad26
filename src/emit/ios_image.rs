//! iOS image set output.
//!
//! Writes `<output>/<name>.imageset/` with the source files copied under
//! their original names and a `Contents.json` listing the 1x/2x/3x slots.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::types::{ImageCatalog, ImageInfo, IOS_SCALES};

use super::{copy_file, ensure_dir, write_contents_json, ContentsInfo, EmitReport};

/// Writes `.imageset` folders.
#[derive(Debug, Clone)]
pub struct IosImageEmitter {
    input: PathBuf,
    output: PathBuf,
}

impl IosImageEmitter {
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
                .map_err(|e| e.context(format!("Failed to generate image set '{}'", image.name)))?;
            report.written += 1;
        }

        Ok(report)
    }

    fn emit_image(&self, image: &ImageInfo) -> Result<()> {
        let dir = self.output.join(format!("{}.imageset", image.name));
        ensure_dir(&dir)?;

        for file in &image.files {
            copy_file(&self.input.join(file), &dir.join(file))?;
        }

        write_contents_json(&dir, &build_image_set(image))
    }
}

/// Build the `Contents.json` descriptor for one image.
///
/// Every scale slot is listed; missing scales have no `filename`.
pub fn build_image_set(image: &ImageInfo) -> ImageSet {
    let images = IOS_SCALES
        .iter()
        .map(|&scale| ImageSlot {
            filename: image
                .has(scale)
                .then(|| image.file_for(scale))
                .flatten()
                .map(str::to_string),
            idiom: "universal",
            scale: scale.label(),
        })
        .collect();

    ImageSet {
        images,
        info: ContentsInfo::default(),
    }
}

/// An image set's `Contents.json`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageSet {
    images: Vec<ImageSlot>,
    info: ContentsInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
struct ImageSlot {
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    idiom: &'static str,
    scale: &'static str,
}
