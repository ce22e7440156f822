use gold_rupee_core::PriceHistory;

use crate::cli::ServeArgs;
use crate::config::load_settings;
use crate::server::{self, AppState};

pub async fn run(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(args.port, &args.data_files, args.public_dir)?;
    tracing::info!(
        port = settings.port,
        window_years = settings.window_years,
        "Starting gold-rupee server"
    );

    let history = PriceHistory::from_settings(&settings);
    match history.resolved_path() {
        Some(path) => tracing::info!("Using data file: {}", path.display()),
        None => tracing::warn!(
            candidates = ?settings.data_files,
            "No data file found yet; /api/gold-rupee will answer 404 until one appears"
        ),
    }

    server::serve(AppState { history }, &settings.public_dir, settings.port).await
}
