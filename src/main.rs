use appassets::cli::{Cli, Commands};
use appassets::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Color(args) => appassets::cli::color::run(args, config, &printer)?,
        Commands::Image(args) => appassets::cli::image::run(args, config, &printer)?,
        Commands::Completions(args) => appassets::cli::completions::run(args)?,
    }

    Ok(())
}
