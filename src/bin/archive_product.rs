use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use raw_api_archiver::{FetchJob, ResponseShape, archiver, fetcher, validator};

// Arnott's Tim Tam Original.
const BARCODE: &str = "9310072002778";
const TIMEOUT: Duration = Duration::from_secs(10);

fn main() -> Result<()> {
    let job = product_job(BARCODE);
    println!("Fetching data for product with barcode: {BARCODE}");
    println!("API endpoint: {}", job.url);

    let doc = fetcher::fetch(&job.url, job.timeout)?;
    println!("Successfully fetched product data.");

    let doc = validator::validate(doc, ResponseShape::ProductLookup)?;

    println!("Saving raw data to {}...", job.output.display());
    archiver::save_to_file(&doc, &job.output)?;
    println!("Data successfully saved.");
    Ok(())
}

fn product_job(barcode: &str) -> FetchJob {
    FetchJob {
        url: format!("https://world.openfoodfacts.org/api/v2/product/{barcode}.json"),
        timeout: TIMEOUT,
        output: PathBuf::from(format!("product_{barcode}.json")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_embeds_barcode_in_url_and_filename() {
        let job = product_job("9310072002778");
        assert_eq!(
            job.url,
            "https://world.openfoodfacts.org/api/v2/product/9310072002778.json"
        );
        assert_eq!(job.output, PathBuf::from("product_9310072002778.json"));
        assert_eq!(job.timeout, Duration::from_secs(10));
    }
}
