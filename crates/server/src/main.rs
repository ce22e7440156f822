use clap::Parser;
use tracing_subscriber::EnvFilter;

use gold_rupee_server::cli::{Cli, Commands};
use gold_rupee_server::commands;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Render(args) => commands::render::run(args).await,
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
