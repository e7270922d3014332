use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One advocate as listed on the register page.
///
/// Every field is the trimmed text of a table cell. Dates and numbers are
/// kept exactly as the page renders them. Field order here is the key order
/// of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocateRecord {
    pub id: String,
    pub name: String,
    pub firm_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub plot_no: String,
    pub enrollment_date: String,
    pub renewal_date: String,
    pub certificate_no: String,
    pub status: String,
}

/// Outcome of a successful pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub url: String,
    pub output_file: PathBuf,
    pub records: usize,
    pub skipped_rows: usize,
    pub status_counts: BTreeMap<String, usize>,
}

impl RunSummary {
    /// Tally records by their `status` column
    pub fn count_statuses(records: &[AdvocateRecord]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for record in records {
            *counts.entry(record.status.clone()).or_insert(0) += 1;
        }
        counts
    }
}
