use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, TimeDelta, Utc};
use raw_api_archiver::{FetchJob, ResponseShape, archiver, fetcher, validator};

/// Trailing window of recall campaigns to pull, in days.
const WINDOW_DAYS: i64 = 30;
const TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    let job = recall_job(Utc::now().date_naive());
    println!("Fetching NHTSA recalls from the last {WINDOW_DAYS} days");
    println!("API endpoint: {}", job.url);

    let doc = fetcher::fetch(&job.url, job.timeout)?;
    println!("Successfully fetched recall data.");

    let results = validator::validate(doc, ResponseShape::RecallList)?;

    println!("Saving results to {}...", job.output.display());
    archiver::save_to_file(&results, &job.output)?;
    println!("Data successfully saved.");
    Ok(())
}

fn recall_job(today: NaiveDate) -> FetchJob {
    let from = today - TimeDelta::days(WINDOW_DAYS);
    FetchJob {
        url: format!(
            "https://api.nhtsa.gov/recalls/recallsByDateRange?fromDate={}&toDate={}",
            from.format("%Y-%m-%d"),
            today.format("%Y-%m-%d"),
        ),
        timeout: TIMEOUT,
        output: PathBuf::from(format!("nhtsa_recalls_{}.json", today.format("%Y_%m_%d"))),
    }
}
