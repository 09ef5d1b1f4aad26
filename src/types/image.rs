//! Source image model: scales, logical images and catalogs.

use std::collections::BTreeMap;

/// File extensions accepted as image sources (lowercase, with the dot).
pub const SUPPORTED_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".svg", ".pdf"];

/// A source resolution, expressed by the `@2x`/`@3x` file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scale {
    One,
    Two,
    Three,
}

/// Scale slots written to every imageset, in order.
pub const IOS_SCALES: [Scale; 3] = [Scale::One, Scale::Two, Scale::Three];

impl Scale {
    /// Label used in `Contents.json` (`"1x"`, `"2x"`, `"3x"`).
    pub fn label(self) -> &'static str {
        match self {
            Scale::One => "1x",
            Scale::Two => "2x",
            Scale::Three => "3x",
        }
    }
}

/// Split a file name into its logical base name, scale and lowercase
/// extension.
///
/// Returns `None` when the extension is not a supported image format or
/// nothing is left of the name once the scale suffix is stripped.
///
/// ```
/// use appassets::types::{parse_image_name, Scale};
///
/// let (name, scale, ext) = parse_image_name("icon-home@2x.PNG").unwrap();
/// assert_eq!(name, "icon-home");
/// assert_eq!(scale, Scale::Two);
/// assert_eq!(ext, ".png");
/// ```
pub fn parse_image_name(file_name: &str) -> Option<(&str, Scale, String)> {
    let dot = file_name.rfind('.')?;
    let (stem, ext) = file_name.split_at(dot);
    let ext = ext.to_ascii_lowercase();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }

    let (name, scale) = if let Some(name) = stem.strip_suffix("@3x") {
        (name, Scale::Three)
    } else if let Some(name) = stem.strip_suffix("@2x") {
        (name, Scale::Two)
    } else {
        (stem, Scale::One)
    };

    if name.is_empty() {
        return None;
    }

    Some((name, scale, ext))
}

/// One logical image and the scales found for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageInfo {
    /// Base name with scale suffix and extension stripped.
    pub name: String,
    /// Lowercase extension of the first file seen, with the dot.
    pub extension: String,
    pub has_1x: bool,
    pub has_2x: bool,
    pub has_3x: bool,
    /// Original file names in scan order.
    pub files: Vec<String>,
}

impl ImageInfo {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            ..Default::default()
        }
    }

    /// Record a source file for the given scale.
    pub fn add_file(&mut self, file_name: impl Into<String>, scale: Scale) {
        self.files.push(file_name.into());
        match scale {
            Scale::One => self.has_1x = true,
            Scale::Two => self.has_2x = true,
            Scale::Three => self.has_3x = true,
        }
    }

    pub fn has(&self, scale: Scale) -> bool {
        match scale {
            Scale::One => self.has_1x,
            Scale::Two => self.has_2x,
            Scale::Three => self.has_3x,
        }
    }

    /// The source file providing the given scale, if one was found.
    ///
    /// When several files share a scale (e.g. `logo.png` and `logo.jpg`)
    /// the first one scanned wins.
    pub fn file_for(&self, scale: Scale) -> Option<&str> {
        self.files
            .iter()
            .map(String::as_str)
            .find(|file| matches!(parse_image_name(file), Some((_, s, _)) if s == scale))
    }
}

/// All logical images found in a source directory, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCatalog {
    images: BTreeMap<String, ImageInfo>,
}

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source file, creating its logical image on first sight.
    ///
    /// Files with unsupported extensions are ignored and return `false`.
    pub fn add_file(&mut self, file_name: &str) -> bool {
        let Some((name, scale, ext)) = parse_image_name(file_name) else {
            return false;
        };

        self.images
            .entry(name.to_string())
            .or_insert_with(|| ImageInfo::new(name, ext))
            .add_file(file_name, scale);
        true
    }

    pub fn get(&self, name: &str) -> Option<&ImageInfo> {
        self.images.get(name)
    }

    /// Iterate over images in name order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageInfo> {
        self.images.values()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
