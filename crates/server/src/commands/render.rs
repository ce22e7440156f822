use gold_rupee_core::clock::SystemClock;
use gold_rupee_core::providers::file::FilePriceSource;
use gold_rupee_core::providers::http::HttpPriceSource;
use gold_rupee_core::providers::traits::PriceSource;
use gold_rupee_core::services::renderer_service::ChartRenderer;
use gold_rupee_core::services::svg_painter::SvgPainter;
use gold_rupee_core::storage::data_file::DataFileLocator;
use std::sync::Arc;

use crate::cli::RenderArgs;
use crate::config::load_settings;

/// Render the chart once, falling back to sample data like the page does.
pub async fn run(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(None, &args.data_files, None)?;

    let source: Arc<dyn PriceSource> = match &args.url {
        Some(url) => Arc::new(HttpPriceSource::for_base_url(url)),
        None => Arc::new(FilePriceSource::new(DataFileLocator::new(
            settings.data_files.clone(),
        ))),
    };
    tracing::info!(source = source.name(), out = %args.out.display(), "Rendering chart");

    let mut renderer = ChartRenderer::new(
        source,
        Arc::new(SystemClock),
        settings.renderer.clone(),
        settings.window_years,
    )
    .with_painter(SvgPainter::new(args.width, args.height));

    let chart = renderer.render().await?;
    if let Some(notice) = &chart.notice {
        tracing::warn!("{notice}");
    }
    std::fs::write(&args.out, &chart.svg)?;
    tracing::info!(points = chart.data.len(), "Wrote {}", args.out.display());
    Ok(())
}
