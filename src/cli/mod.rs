pub mod color;
pub mod completions;
pub mod image;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::discovery::Manifest;
use crate::error::Result;

/// appassets - iOS and Android resource generator
#[derive(Parser, Debug)]
#[command(name = "appassets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project manifest (defaults to ./appassets.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate colour resources from a YAML palette
    Color(color::ColorArgs),

    /// Generate image resources from a folder of @2x/@3x images
    Image(image::ImageArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the manifest named by `--config`, or the one in the current
/// directory, or fall back to defaults.
pub fn load_manifest(config: Option<&Path>) -> Result<Manifest> {
    match config {
        Some(path) => Manifest::load(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Manifest::find(&cwd)?.unwrap_or_default())
        }
    }
}
