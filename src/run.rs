use anyhow::Result;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::analyze::{analyze_niche, NicheReport};
use crate::config::Config;
use crate::{report, youtube};

/// Counts from a completed run, for the final console summary.
#[derive(Debug)]
pub struct RunSummary {
    pub analyzed: usize,
    pub failed: usize,
}

/// Full analysis workflow: validate the credential, load the niche list,
/// analyze each niche sequentially with a fixed pause between requests, then
/// sort and write the CSV report.
///
/// A failure on one niche is reported and skipped; it never aborts the run.
/// Missing credential, missing/empty input, and output write failures do.
pub fn run(config: &Config) -> Result<RunSummary> {
    let total_start_time = Instant::now();
    println!("=== YouTube Niche Analysis ===");

    config.validate()?;

    let niches = report::read_niches_from_file(&config.input_path)?;
    if niches.is_empty() {
        anyhow::bail!("No niches to analyze in '{}'", config.input_path.display());
    }

    let client = youtube::http_client(config.request_timeout)?;
    let (mut results, failed) = analyze_all(&niches, config.request_delay, |niche| {
        analyze_niche(&client, config, niche)
    });

    report::sort_by_opportunity(&mut results);
    report::save_results_to_csv(&results, &config.output_path)?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "run",
        analyzed = results.len(),
        failed,
        duration_ms = total_time.as_millis(),
        "Run completed"
    );

    println!(
        "\n=== Done! Results saved to '{}' ===",
        config.output_path.display()
    );
    println!("Tip: open the CSV in a spreadsheet to compare niches side by side.");

    Ok(RunSummary {
        analyzed: results.len(),
        failed,
    })
}

/// Sequential per-niche loop with per-item error isolation: a failed niche is
/// reported and skipped, successful reports accumulate in input order. Pauses
/// for `delay` between items, not after the last one.
fn analyze_all<F>(niches: &[String], delay: Duration, mut analyze: F) -> (Vec<NicheReport>, usize)
where
    F: FnMut(&str) -> Result<NicheReport>,
{
    let mut results: Vec<NicheReport> = Vec::with_capacity(niches.len());
    let mut failed = 0usize;

    for (index, niche) in niches.iter().enumerate() {
        println!("\n[{}/{}] Analyzing niche: {}", index + 1, niches.len(), niche);

        match analyze(niche) {
            Ok(result) => {
                println!("  Video count          : {}", result.video_count);
                println!("  Unique channel count : {}", result.unique_channel_count);
                println!("  Opportunity score    : {}", score_display(result.opportunity_score));
                results.push(result);
            }
            Err(e) => {
                failed += 1;
                error!(action = "analyze", component = "niche_loop", niche = %niche, error = %e, "Niche analysis failed");
                println!("  [ERROR] Failed to analyze niche '{}': {:#}", niche, e);
            }
        }

        // Pause between requests to stay clear of quota trouble
        if index + 1 < niches.len() {
            thread::sleep(delay);
        }
    }

    (results, failed)
}

/// Fixed two-decimal rendering so whole-number scores print as "2.00", not "2".
fn score_display(score: f64) -> String {
    format!("{:.2}", score)
}
