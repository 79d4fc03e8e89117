use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nichescout",
    about = "Rank YouTube content niches by their videos-per-channel opportunity score",
    version,
    long_about = None
)]
pub struct Args {
    /// Input file with one niche query per line
    #[arg(short, long, default_value = "niches.txt")]
    pub input: PathBuf,

    /// Output CSV report path
    #[arg(short, long, default_value = "niche_report.csv")]
    pub output: PathBuf,

    /// Videos to request per niche (single page, no pagination)
    #[arg(short, long, default_value_t = 25)]
    pub max_results: u32,

    /// Seconds to wait between API requests
    #[arg(short, long, default_value_t = 1)]
    pub delay: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// YouTube Data API v3 key (falls back to the YOUTUBE_API_KEY env var)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
