//! Target platform selection.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which platform bundles to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    #[default]
    All,
}

impl Platform {
    pub fn includes_ios(self) -> bool {
        matches!(self, Platform::Ios | Platform::All)
    }

    pub fn includes_android(self) -> bool {
        matches!(self, Platform::Android | Platform::All)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::All => "all",
        })
    }
}
