use std::path::PathBuf;

use clap::Parser;

use icopack::{BundleOpts, DEFAULT_SIZES, PngCodec, bundle_icon_to_path, decode_source_path};

/// Bundle one source image into a multi-resolution Windows icon (`.ico`).
#[derive(Parser, Debug)]
#[command(name = "icopack", version)]
struct Cli {
    /// Input image (PNG, JPEG, ... or SVG).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output `.ico` path.
    #[arg(long)]
    out: PathBuf,

    /// Comma-separated icon edge lengths, each within 1..=256.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<u32>,

    /// Build frames for different sizes in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let source = decode_source_path(&cli.in_path)?;
    let opts = BundleOpts {
        parallel: cli.parallel,
        threads: cli.threads,
    };
    bundle_icon_to_path(&source, &cli.sizes, &PngCodec, &opts, &cli.out)?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
