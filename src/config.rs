use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::Args;

/// Sentinel for a credential that was never configured.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Immutable runtime configuration, assembled once at startup and passed
/// explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub max_results: u32,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub request_delay: Duration,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let api_key = args
            .api_key
            .clone()
            .or_else(|| env::var("YOUTUBE_API_KEY").ok())
            .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());

        Self {
            api_key,
            max_results: args.max_results,
            input_path: args.input.clone(),
            output_path: args.output.clone(),
            request_delay: Duration::from_secs(args.delay),
            request_timeout: Duration::from_secs(args.timeout),
        }
    }

    /// Rejects a missing or never-replaced API credential before any network
    /// or file access happens.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            anyhow::bail!(
                "No YouTube API key configured. Pass --api-key or set YOUTUBE_API_KEY."
            );
        }
        Ok(())
    }
}
