//! Project manifest (appassets.yaml) parsing.
//!
//! The manifest is optional. It supplies defaults that would otherwise have
//! to be repeated on every invocation.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};
use crate::types::Platform;

/// Project manifest loaded from appassets.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Default platform when `--platform` is not given.
    pub platform: Option<Platform>,

    /// File-name globs skipped by the image scanner.
    pub excludes: Vec<String>,
}

impl Manifest {
    /// Load manifest from an appassets.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| AssetError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check appassets.yaml syntax".to_string()),
        })
    }

    /// Load the manifest in `dir` if there is one.
    pub fn find(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(super::MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Compile the exclude patterns.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.excludes {
            let glob = Glob::new(pattern).map_err(|e| AssetError::Parse {
                message: format!("Invalid exclude pattern '{}': {}", pattern, e),
                help: Some("Use glob syntax such as \"*.pdf\" or \"draft-*\"".to_string()),
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| AssetError::Parse {
            message: format!("Invalid exclude patterns: {}", e),
            help: None,
        })
    }

    /// Pick the platform: explicit choice, then manifest, then `all`.
    pub fn effective_platform(&self, requested: Option<Platform>) -> Platform {
        requested.or(self.platform).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
platform: android
excludes:
  - "*.pdf"
  - "draft-*"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.platform, Some(Platform::Android));
        assert_eq!(manifest.excludes, vec!["*.pdf", "draft-*"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_parse_invalid_platform() {
        let err = Manifest::parse("platform: windows").unwrap_err();
        assert!(matches!(err, AssetError::Parse { .. }));
    }

    #[test]
    fn test_exclude_set() {
        let manifest = Manifest {
            excludes: vec!["*.pdf".to_string(), "draft-*".to_string()],
            ..Default::default()
        };
        let set = manifest.exclude_set().unwrap();

        assert!(set.is_match("logo.pdf"));
        assert!(set.is_match("draft-logo@2x.png"));
        assert!(!set.is_match("logo.png"));
    }

    #[test]
    fn test_invalid_exclude_pattern() {
        let manifest = Manifest {
            excludes: vec!["[unclosed".to_string()],
            ..Default::default()
        };
        assert!(manifest.exclude_set().is_err());
    }

    #[test]
    fn test_effective_platform() {
        let manifest = Manifest {
            platform: Some(Platform::Ios),
            ..Default::default()
        };

        assert_eq!(manifest.effective_platform(None), Platform::Ios);
        assert_eq!(
            manifest.effective_platform(Some(Platform::Android)),
            Platform::Android
        );
        assert_eq!(Manifest::default().effective_platform(None), Platform::All);
    }

    #[test]
    fn test_find() {
        let dir = tempdir().unwrap();
        assert_eq!(Manifest::find(dir.path()).unwrap(), None);

        std::fs::write(dir.path().join("appassets.yaml"), "platform: ios\n").unwrap();
        let manifest = Manifest::find(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.platform, Some(Platform::Ios));
    }
}
