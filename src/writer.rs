use crate::error::{Result, ScraperError};
use crate::types::AdvocateRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Pretty-printed (2-space) JSON array of records
pub fn to_json(records: &[AdvocateRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Serialize `records` and write them to `path`, replacing any existing file.
///
/// The file is only opened once serialization has succeeded. New files are
/// created with mode 0644 on Unix.
pub fn write_records(path: &Path, records: &[AdvocateRecord]) -> Result<()> {
    let json = to_json(records)?;

    let io_err = |source| ScraperError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(io_err)?;
    file.write_all(&json).map_err(io_err)?;

    info!(path = %path.display(), records = records.len(), "Wrote advocates file");
    Ok(())
}
