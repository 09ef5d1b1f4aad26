//! Image command implementation.
//!
//! Scans a flat folder of `@2x`/`@3x` images once, then writes iOS image
//! sets and/or Android drawables.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::scan_images;
use crate::emit::{AndroidImageEmitter, IosImageEmitter};
use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::Platform;

/// Generate image resources from a folder of @2x/@3x images
#[derive(Args, Debug)]
pub struct ImageArgs {
    /// Directory of source images
    #[arg(long, short)]
    pub input: PathBuf,

    /// Output directory
    #[arg(long, short)]
    pub output: PathBuf,

    /// Target platform [default: all]
    #[arg(long, short, value_enum)]
    pub platform: Option<Platform>,
}

pub fn run(args: ImageArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    if !args.input.exists() {
        return Err(AssetError::Io {
            path: args.input.clone(),
            message: "Input directory not found".to_string(),
        });
    }
    if !args.input.is_dir() {
        return Err(AssetError::Io {
            path: args.input.clone(),
            message: "Input path is not a directory".to_string(),
        });
    }

    let manifest = super::load_manifest(config)?;
    let platform = manifest.effective_platform(args.platform);

    let catalog = scan_images(&args.input, &manifest)?;
    printer.status(
        "Scanned",
        &format!(
            "{} in {}",
            plural(catalog.len(), "image", "images"),
            display_path(&args.input)
        ),
    );

    if platform.includes_ios() {
        printer.status("Generating", "iOS image sets");
        let report = IosImageEmitter::new(&args.input, &args.output)
            .emit(&catalog)
            .map_err(|e| e.context("Failed to generate iOS images"))?;
        printer.info("Wrote", &plural(report.written, "image set", "image sets"));
    }

    if platform.includes_android() {
        printer.status("Generating", "Android drawables");
        let report = AndroidImageEmitter::new(&args.input, &args.output)
            .emit(&catalog)
            .map_err(|e| e.context("Failed to generate Android images"))?;
        printer.info("Wrote", &plural(report.written, "drawable", "drawables"));
    }

    printer.status(
        "Finished",
        &format!("{} images -> {}", platform, display_path(&args.output)),
    );

    Ok(())
}
