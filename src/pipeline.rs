use crate::config::Config;
use crate::error::{Result, ScraperError};
use crate::extractor::extract_from_html;
use crate::fetcher::{build_client, fetch_page};
use crate::types::RunSummary;
use crate::writer::write_records;
use reqwest::blocking::Client;
use tracing::{info, info_span, warn};

/// Fetch → extract → write, stopping at the first failing stage.
///
/// Nothing touches the output file until the page has been fetched and
/// extracted successfully.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunSummary> {
        let client = build_client(&self.config.source)?;
        self.run_with_client(&client)
    }

    pub fn run_with_client(&self, client: &Client) -> Result<RunSummary> {
        let url = self.config.source.url.as_str();
        let output_file = &self.config.output.path;
        let span = info_span!("pipeline", url = %url);
        let _enter = span.enter();

        let body = fetch_page(client, url)?;
        let extraction = extract_from_html(&body)?;
        drop(body);

        if extraction.records.is_empty() {
            if self.config.output.require_records {
                return Err(ScraperError::NoRecords {
                    url: url.to_string(),
                });
            }
            warn!("No advocate records found - the page structure may have changed");
        }

        let status_counts = RunSummary::count_statuses(&extraction.records);
        for (status, count) in &status_counts {
            info!(status = %status, count, "Status breakdown");
        }

        write_records(output_file, &extraction.records)?;

        Ok(RunSummary {
            url: url.to_string(),
            output_file: output_file.clone(),
            records: extraction.records.len(),
            skipped_rows: extraction.skipped_rows,
            status_counts,
        })
    }
}
