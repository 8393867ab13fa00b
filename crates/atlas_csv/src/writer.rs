//! CSV dataset persistence.

use std::path::Path;

use atlas_core::Country;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::CsvResult;
use crate::reader::EXPECTED_HEADERS;

/// Saves records to `path`, replacing the file atomically.
///
/// Rows are written to a temporary file in the destination directory,
/// synced, and renamed over the target, so a concurrent reader (or a
/// crash mid-save) observes either the previous contents or the new
/// ones, never a partial file. Records are written in store order with
/// the canonical `name,population,area,continent` header.
pub fn save_countries(path: &Path, records: &[Country]) -> CsvResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut tmp);
        writer.write_record(EXPECTED_HEADERS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    info!(count = records.len(), path = %path.display(), "dataset saved");
    Ok(())
}
