use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gold-rupee-server")]
#[command(about = "Gold vs. rupee price history server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Render the chart to an SVG file
    Render(RenderArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Candidate data file; may be repeated, first existing file wins
    #[arg(short = 'f', long = "data-file")]
    pub data_files: Vec<PathBuf>,

    /// Directory with the static front end
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Endpoint base URL, e.g. http://localhost:3000; reads the data file directly when omitted
    #[arg(short, long)]
    pub url: Option<String>,

    /// Candidate data file when no URL is given; may be repeated
    #[arg(short = 'f', long = "data-file")]
    pub data_files: Vec<PathBuf>,

    /// Output SVG path
    #[arg(short, long, default_value = "gold-rupee.svg")]
    pub out: PathBuf,

    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    #[arg(long, default_value_t = 500)]
    pub height: u32,
}
