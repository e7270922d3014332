//! Turns the register page's table rows into [`AdvocateRecord`]s.
//!
//! A row is data when it has no `th` cell and at least [`MIN_COLUMNS`] `td`
//! cells. Header rows and short rows are dropped without error. The page
//! layout is encoded in [`record_from_cells`] and nowhere else.

use crate::constants::{DATA_CELL_SELECTOR, HEADER_CELL_SELECTOR, MIN_COLUMNS, ROW_SELECTOR};
use crate::error::{Result, ScraperError};
use crate::types::AdvocateRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, trace};

/// Records in document order, plus how many non-header rows were too short
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<AdvocateRecord>,
    pub skipped_rows: usize,
}

struct RowSelectors {
    row: Selector,
    header: Selector,
    cell: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: parse_selector(ROW_SELECTOR)?,
            header: parse_selector(HEADER_CELL_SELECTOR)?,
            cell: parse_selector(DATA_CELL_SELECTOR)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{}: {}", css, e)))
}

/// Parse `body` as an HTML document and extract every data row.
pub fn extract_from_html(body: &str) -> Result<Extraction> {
    let document = Html::parse_document(body);
    if !document.errors.is_empty() {
        debug!(count = document.errors.len(), "HTML parser recovered from markup errors");
    }
    extract_records(&document)
}

pub fn extract_records(document: &Html) -> Result<Extraction> {
    let selectors = RowSelectors::new()?;
    let mut extraction = Extraction::default();

    for (index, row) in document.select(&selectors.row).enumerate() {
        if row.select(&selectors.header).next().is_some() {
            trace!(row = index, "Skipping header row");
            continue;
        }

        let cells: Vec<String> = row.select(&selectors.cell).map(cell_text).collect();
        match record_from_cells(&cells) {
            Some(record) => extraction.records.push(record),
            None => {
                trace!(row = index, cells = cells.len(), "Skipping short row");
                extraction.skipped_rows += 1;
            }
        }
    }

    info!(
        records = extraction.records.len(),
        skipped = extraction.skipped_rows,
        "Extracted advocate rows"
    );
    Ok(extraction)
}

/// All descendant text of a cell, trimmed
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Map cell texts to a record by position. Cells past the eleventh are ignored.
///
/// Returns `None` when fewer than [`MIN_COLUMNS`] cells are present.
pub fn record_from_cells(cells: &[String]) -> Option<AdvocateRecord> {
    let cells = cells.get(..MIN_COLUMNS)?;
    Some(AdvocateRecord {
        id: cells[0].clone(),
        name: cells[1].clone(),
        firm_name: cells[2].clone(),
        address: cells[3].clone(),
        email: cells[4].clone(),
        phone: cells[5].clone(),
        plot_no: cells[6].clone(),
        enrollment_date: cells[7].clone(),
        renewal_date: cells[8].clone(),
        certificate_no: cells[9].clone(),
        status: cells[10].clone(),
    })
}
