use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epd_pipeline::{pipeline, ToneOptions};
use photoframe::error::ProcessError;
use photoframe::io;

#[derive(Parser)]
#[command(name = "photoframe")]
#[command(about = "PhotoFrame image processor - prepares photos for 7-color e-paper frames")]
struct Cli {
    /// Input photo (JPEG, PNG or BMP)
    input: PathBuf,

    /// Output directory for the BMP and thumbnail
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Brightness adjustment in photographic f-stops
    #[arg(short, long, default_value_t = 0.3)]
    brightness: f32,

    /// Contrast multiplier
    #[arg(short, long, default_value_t = 1.3)]
    contrast: f32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "photoframe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let original = io::decode(&cli.input)?;
    tracing::info!(
        width = original.width(),
        height = original.height(),
        "Decoded {}",
        cli.input.display()
    );

    if original.height() > original.width() {
        tracing::info!("Portrait orientation, rotating 90 degrees clockwise");
    }

    let options = ToneOptions {
        contrast: cli.contrast,
        brightness_fstop: cli.brightness,
    };
    tracing::info!(
        contrast = options.contrast,
        brightness_fstop = options.brightness_fstop,
        "Applying tone adjustment and Floyd-Steinberg dithering"
    );

    let dithered = pipeline::process(&original, &options).map_err(ProcessError::from)?;
    let thumb = pipeline::thumbnail(&original).map_err(ProcessError::from)?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;

    let stem = cli
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());

    let bmp_path = cli.output_dir.join(format!("{stem}.bmp"));
    let thumb_path = cli.output_dir.join(format!("{stem}.jpg"));

    io::write_bmp(&dithered, &bmp_path)?;
    tracing::info!("Wrote {}", bmp_path.display());

    io::write_jpeg_thumbnail(&thumb, &thumb_path)?;
    tracing::info!(
        width = thumb.width(),
        height = thumb.height(),
        "Wrote {}",
        thumb_path.display()
    );

    Ok(())
}
