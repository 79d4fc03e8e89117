use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::analyze::NicheReport;

/// Read niche queries from a text file, one per line. Lines are trimmed,
/// blanks are dropped, and file order is preserved. A missing file is
/// reported to the user and yields an empty list; the caller treats an empty
/// list as fatal.
pub fn read_niches_from_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        warn!(action = "load", component = "input_file", path = ?path, "Input file not found");
        println!("[ERROR] Input file '{}' not found.", path.display());
        println!("Create a file named 'niches.txt' with one niche per line.");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file '{}'", path.display()))?;

    let niches: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!(
        action = "load",
        component = "input_file",
        niche_count = niches.len(),
        "Loaded niches from input file"
    );
    Ok(niches)
}

/// Stable sort by opportunity score, highest first. Equal scores keep their
/// relative processing order.
pub fn sort_by_opportunity(reports: &mut [NicheReport]) {
    reports.sort_by(|a, b| b.opportunity_score.total_cmp(&a.opportunity_score));
}

/// Write the report rows to CSV, overwriting any existing file. The header
/// row comes from the `NicheReport` field names.
pub fn save_results_to_csv(reports: &[NicheReport], path: &Path) -> Result<()> {
    let file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for report in reports {
        writer.serialize(report).context("Failed to serialize report row")?;
    }
    writer.flush().context("Failed to flush CSV output")?;

    info!(
        action = "save",
        component = "csv_output",
        path = ?path,
        row_count = reports.len(),
        "Report written"
    );
    Ok(())
}
