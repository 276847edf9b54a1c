use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use image_cleaner::{BatchCleaner, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        threshold = config.params.threshold,
        min_blob_size = config.params.min_blob_size,
        margin = config.params.effective_margin(),
        "Starting image-cleaner v{}",
        env!("CARGO_PKG_VERSION")
    );

    let processor = BatchCleaner::from_config(config).context("Invalid cleaning parameters")?;
    let report = processor
        .process_directory()
        .context("Batch processing aborted")?;

    tracing::info!(
        cleaned = report.cleaned_count(),
        skipped = report.skipped_count(),
        "Finished {} image(s)",
        report.len()
    );

    Ok(())
}
