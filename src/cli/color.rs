//! Color command implementation.
//!
//! Parses a YAML palette once, then writes iOS colour sets and/or Android
//! colour resources.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::emit::{AndroidColorEmitter, EmitReport, IosColorEmitter};
use crate::error::{AssetError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::load_palette;
use crate::types::Platform;

/// Generate colour resources from a YAML palette
#[derive(Args, Debug)]
pub struct ColorArgs {
    /// YAML palette file
    #[arg(long, short)]
    pub input: PathBuf,

    /// Output directory
    #[arg(long, short)]
    pub output: PathBuf,

    /// Target platform [default: all]
    #[arg(long, short, value_enum)]
    pub platform: Option<Platform>,
}

pub fn run(args: ColorArgs, config: Option<&Path>, printer: &Printer) -> Result<()> {
    if !args.input.exists() {
        return Err(AssetError::Io {
            path: args.input.clone(),
            message: "Input file not found".to_string(),
        });
    }

    let manifest = super::load_manifest(config)?;
    let platform = manifest.effective_platform(args.platform);

    let palette = load_palette(&args.input)?;
    printer.status(
        "Loaded",
        &format!(
            "{} from {}",
            plural(palette.len(), "colour", "colours"),
            display_path(&args.input)
        ),
    );

    let gradients = palette.gradient_count();
    if gradients > 0 {
        printer.warning(
            "Skipping",
            &format!("{} (not supported)", plural(gradients, "gradient", "gradients")),
        );
    }

    if platform.includes_ios() {
        printer.status("Generating", "iOS colour sets");
        let report = IosColorEmitter::new(&args.output)
            .emit(&palette)
            .map_err(|e| e.context("Failed to generate iOS colours"))?;
        report_written(printer, &report, "colour set", "colour sets");
    }

    if platform.includes_android() {
        printer.status("Generating", "Android colour resources");
        let report = AndroidColorEmitter::new(&args.output)
            .emit(&palette)
            .map_err(|e| e.context("Failed to generate Android colours"))?;
        report_written(printer, &report, "colour resource", "colour resources");
    }

    printer.status(
        "Finished",
        &format!("{} colours -> {}", platform, display_path(&args.output)),
    );

    Ok(())
}

fn report_written(printer: &Printer, report: &EmitReport, singular: &str, pluralized: &str) {
    printer.info("Wrote", &plural(report.written, singular, pluralized));
}
