//! duotone - two-color tone mapping for raster images

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "duotone")]
#[command(author, version, about = "Two-color tone mapping for raster images")]
#[command(long_about = "
Applies a duotone effect to an image: brightness/contrast adjustment,
luminance tone mapping onto a highlight/shadow color pair, and an
intensity blend against the adjusted original. Reads PNG or JPEG,
exports PNG.

Examples:
  duotone apply photo.jpg                       # Defaults, auto-named output
  duotone apply photo.jpg -o out.png -i 70      # 70% intensity
  duotone apply photo.jpg --contrast 130 --brightness 90
  duotone apply photo.jpg --highlight ff9a00 --shadow 00284f
  duotone apply photo.jpg --no-fit              # Keep source dimensions
  duotone info photo.png                        # Show image info
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the duotone transform
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Output PNG (default: <stem>-duotone-<id>.png next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Effect intensity on the 0-100 slider scale (0 = original colors)
    #[arg(short, long, default_value = "100")]
    intensity: u32,

    /// Contrast on the 0-100 slider scale (100 = unchanged, >100 allowed)
    #[arg(short, long, default_value = "100")]
    contrast: u32,

    /// Brightness on the 0-100 slider scale (100 = unchanged, >100 allowed)
    #[arg(short, long, default_value = "100")]
    brightness: u32,

    /// Highlight color as RRGGBB hex
    #[arg(long, default_value = "c8659a")]
    highlight: String,

    /// Shadow color as RRGGBB hex
    #[arg(long, default_value = "2d5a3d")]
    shadow: String,

    /// Largest output dimension in pixels
    #[arg(short, long, default_value = "800")]
    max_dimension: u32,

    /// Keep the source dimensions (skip the bound fit)
    #[arg(long)]
    no_fit: bool,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
    }
}
