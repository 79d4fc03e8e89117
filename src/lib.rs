pub mod analyze;
pub mod args;
pub mod config;
pub mod report;
pub mod run;
pub mod utils;
pub mod youtube;

pub use analyze::{analyze_niche, NicheReport};
pub use args::Args;
pub use config::Config;
pub use run::{run, RunSummary};
