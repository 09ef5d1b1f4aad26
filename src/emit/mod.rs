//! Platform emitters.
//!
//! Each emitter is a small value object holding its input/output paths. It
//! reads an immutable [`Palette`](crate::types::Palette) or
//! [`ImageCatalog`](crate::types::ImageCatalog) and writes one platform's
//! resource layout. The first failure aborts the emitter; files already
//! written are left in place.

mod android_colour;
mod android_image;
mod ios_colour;
mod ios_image;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{AssetError, Result};

pub use android_colour::{
    collect_android_colours, format_android_color, render_colors_xml, AndroidColorEmitter,
    AndroidColours, ColorResource,
};
pub use android_image::{android_resource_name, AndroidImageEmitter};
pub use ios_colour::{build_color_set, ColorSet, IosColorEmitter};
pub use ios_image::{build_image_set, ImageSet, IosImageEmitter};

/// Name of the asset catalog descriptor file.
pub const CONTENTS_FILENAME: &str = "Contents.json";

/// Summary of one emitter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Assets written (colour sets, colour resources or images).
    pub written: usize,
    /// Entries deliberately not emitted (gradients).
    pub skipped: usize,
}

/// The `info` block every `Contents.json` carries.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentsInfo {
    pub author: &'static str,
    pub version: u32,
}

impl Default for ContentsInfo {
    fn default() -> Self {
        Self {
            author: "xcode",
            version: 1,
        }
    }
}

/// Create a directory and any missing parents.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create directory: {}", e),
    })
}

/// Write a text file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| AssetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// Copy a file byte-for-byte, creating the destination's parent directory.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }

    fs::copy(src, dst).map_err(|e| AssetError::Io {
        path: src.to_path_buf(),
        message: format!("Failed to copy to {}: {}", dst.display(), e),
    })?;
    Ok(())
}

/// Serialize a descriptor as pretty JSON and write it to `dir/Contents.json`.
pub(crate) fn write_contents_json<T: Serialize>(dir: &Path, contents: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(contents).map_err(|e| AssetError::Parse {
        message: format!("Failed to serialize {}: {}", CONTENTS_FILENAME, e),
        help: None,
    })?;
    json.push('\n');

    write_file(&dir.join(CONTENTS_FILENAME), &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_creates_parents() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.png");
        let dst = dir.path().join("out/nested/a.png");
        fs::write(&src, [0x89, b'P', b'N', b'G']).unwrap();

        copy_file(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_copy_missing_source() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("missing.png"), &dir.path().join("x.png"));
        assert!(matches!(err, Err(AssetError::Io { .. })));
    }

    #[test]
    fn test_write_contents_json_has_trailing_newline() {
        let dir = tempdir().unwrap();
        write_contents_json(dir.path(), &ContentsInfo::default()).unwrap();

        let written = fs::read_to_string(dir.path().join(CONTENTS_FILENAME)).unwrap();
        assert_eq!(written, "{\n  \"author\": \"xcode\",\n  \"version\": 1\n}\n");
    }
}
