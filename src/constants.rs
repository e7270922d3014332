/// Defaults for the advocates register scrape.
/// Every value here can be overridden through `Config`.

/// Public page listing every registered advocate
pub const DEFAULT_URL: &str = "https://www.judiciary.go.ug/print_all_advocates.php";

/// Output file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "advocates.json";

/// Minimum number of `<td>` cells a row needs to become a record
pub const MIN_COLUMNS: usize = 11;

// Selectors used by the extractor
pub const ROW_SELECTOR: &str = "table tr";
pub const HEADER_CELL_SELECTOR: &str = "th";
pub const DATA_CELL_SELECTOR: &str = "td";

/// Filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "advocates_scraper=info,warn";

/// File name (prefix) for the rolling JSON log
pub const LOG_FILE_NAME: &str = "scraper.log";
