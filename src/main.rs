use anyhow::Context;
use clap::Parser;
use coffeenote_mockup::config::Config;
use coffeenote_mockup::draw::FontResolver;
use coffeenote_mockup::mockup;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coffeenote-mockup")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("COFFEENOTE_MOCKUP_GIT_HASH"), ")"),
    about = "Renders the CoffeeNote personal center visual mockup to PNG"
)]
struct Cli {
    /// Write the PNG here instead of next to the executable
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Read settings from this file instead of the default config location
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let output_path = cli
        .output
        .map(|path| coffeenote_mockup::config::expand_tilde(&path))
        .unwrap_or_else(|| config.output_path());

    log::info!(
        "Rendering mockup with {} font candidate(s)",
        config.fonts.candidates.len()
    );
    let fonts = FontResolver::new(config.fonts.candidates);

    let written = mockup::render_to_file(fonts, &output_path)
        .with_context(|| format!("Failed to render mockup to {}", output_path.display()))?;

    log::info!("Mockup saved successfully: {}", written.display());
    println!("UI mock saved to {}", written.display());

    Ok(())
}
